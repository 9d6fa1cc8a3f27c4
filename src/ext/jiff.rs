use crate::error::{error, Error};
use crate::Smalltime;
use jiff::civil::DateTime;
use jiff::tz::Offset;
use jiff::Timestamp;

const NANOS_PER_MICRO: i32 = 1_000;

/// Truncates to microseconds.
impl From<DateTime> for Smalltime {
    fn from(x: DateTime) -> Self {
        Smalltime::new_with_day_of_year(
            i32::from(x.year()),
            x.day_of_year() as u16,
            x.hour() as u8,
            x.minute() as u8,
            x.second() as u8,
            (x.subsec_nanosecond() / NANOS_PER_MICRO) as u32,
        )
    }
}

/// The civil date and time of `x` in UTC, truncated to microseconds.
impl From<Timestamp> for Smalltime {
    fn from(x: Timestamp) -> Self {
        Smalltime::from(Offset::UTC.to_datetime(x))
    }
}

impl TryFrom<Smalltime> for DateTime {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        t.validate()?;
        let year = i16::try_from(t.year()).map_err(|_| error("date out of range"))?;
        let (month, day) = t.month_day();
        DateTime::new(
            year,
            month as i8,
            day as i8,
            t.hour() as i8,
            t.minute() as i8,
            t.second() as i8,
            t.microsecond() as i32 * NANOS_PER_MICRO,
        )
        .map_err(|_| error("date time out of range"))
    }
}

impl TryFrom<Smalltime> for Timestamp {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        let dt = DateTime::try_from(t)?;
        Offset::UTC
            .to_timestamp(dt)
            .map_err(|_| error("timestamp out of range"))
    }
}
