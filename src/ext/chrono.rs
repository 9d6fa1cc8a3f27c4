use crate::error::{error, Error};
use crate::Smalltime;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

const NANOS_PER_MICRO: u32 = 1_000;
const NANOS_PER_SECOND: u32 = 1_000_000_000;
const MICROS_PER_SECOND: u32 = 1_000_000;

/// Truncates to microseconds. chrono's leap second (second 59 with a nanosecond of 1e9 or more)
/// becomes second 60.
impl From<NaiveDateTime> for Smalltime {
    fn from(x: NaiveDateTime) -> Self {
        let (second, nanosecond) = match x.nanosecond().checked_sub(NANOS_PER_SECOND) {
            Some(leap_nanosecond) => (x.second() + 1, leap_nanosecond),
            None => (x.second(), x.nanosecond()),
        };
        Smalltime::new_with_day_of_year(
            x.year(),
            x.ordinal() as u16,
            x.hour() as u8,
            x.minute() as u8,
            second as u8,
            nanosecond / NANOS_PER_MICRO,
        )
    }
}

impl From<DateTime<Utc>> for Smalltime {
    fn from(x: DateTime<Utc>) -> Self {
        Smalltime::from(x.naive_utc())
    }
}

impl TryFrom<Smalltime> for NaiveDateTime {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        t.validate()?;
        let date = NaiveDate::from_yo_opt(t.year(), t.day_of_year() as u32)
            .ok_or_else(|| error("date out of range"))?;

        // chrono only has leap seconds at second 59.
        let (second, microsecond) = if t.second() == 60 {
            (59, t.microsecond() + MICROS_PER_SECOND)
        } else {
            (t.second(), t.microsecond())
        };
        let time = NaiveTime::from_hms_micro_opt(
            t.hour() as u32,
            t.minute() as u32,
            second as u32,
            microsecond,
        )
        .ok_or_else(|| error("time out of range"))?;
        Ok(NaiveDateTime::new(date, time))
    }
}

impl TryFrom<Smalltime> for DateTime<Utc> {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        let naive = NaiveDateTime::try_from(t)?;
        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}
