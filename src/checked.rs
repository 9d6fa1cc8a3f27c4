use crate::calendar::{days_in_month, days_in_year, ymd_to_doy};
use crate::error::{err, Error};
use crate::Smalltime;

const MICROSECONDS_PER_SECOND: u32 = 1_000_000;

/// Validating constructors, for input that shouldn't be silently truncated.
impl Smalltime {
    /// Like [`Smalltime::new`], but returns an error instead of truncating when any field is out of
    /// range or the date doesn't exist in `year`.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self, Error> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return err("month out of range");
        }
        if day == 0 || day > days_in_month(year, month) {
            return err("day out of range");
        }
        check_time(hour, minute, second, microsecond)?;
        Ok(Self::new_with_day_of_year(
            year,
            ymd_to_doy(year, month, day),
            hour,
            minute,
            second,
            microsecond,
        ))
    }

    /// Like [`Smalltime::new_with_day_of_year`], but returns an error instead of truncating when any
    /// field is out of range or `year` has no such day.
    pub fn try_new_with_day_of_year(
        year: i32,
        day_of_year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Result<Self, Error> {
        check_year(year)?;
        check_day_of_year(year, day_of_year)?;
        check_time(hour, minute, second, microsecond)?;
        Ok(Self::new_with_day_of_year(
            year,
            day_of_year,
            hour,
            minute,
            second,
            microsecond,
        ))
    }

    /// Returns an error if any stored field is out of range for a real instant. The year always
    /// fits, since every 18-bit year is in range.
    pub fn validate(self) -> Result<(), Error> {
        check_day_of_year(self.year(), self.day_of_year())?;
        check_time(
            self.hour(),
            self.minute(),
            self.second(),
            self.microsecond(),
        )
    }

    /// Returns true if [`Smalltime::validate`] would succeed.
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }
}

fn check_year(year: i32) -> Result<(), Error> {
    if !(Smalltime::MIN_YEAR..=Smalltime::MAX_YEAR).contains(&year) {
        return err("year out of range");
    }
    Ok(())
}

fn check_day_of_year(year: i32, day_of_year: u16) -> Result<(), Error> {
    if day_of_year == 0 || day_of_year > days_in_year(year) {
        return err("day of year out of range");
    }
    Ok(())
}

fn check_time(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<(), Error> {
    if hour >= 24 {
        return err("hour out of range");
    }
    if minute >= 60 {
        return err("minute out of range");
    }
    // 60 is a leap second.
    if second > 60 {
        return err("second out of range");
    }
    if microsecond >= MICROSECONDS_PER_SECOND {
        return err("microsecond out of range");
    }
    Ok(())
}
