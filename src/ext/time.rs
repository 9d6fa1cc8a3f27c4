use crate::error::{err, error, Error};
use crate::Smalltime;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// Truncates to microseconds.
impl From<PrimitiveDateTime> for Smalltime {
    fn from(x: PrimitiveDateTime) -> Self {
        Smalltime::new_with_day_of_year(
            x.year(),
            x.ordinal(),
            x.hour(),
            x.minute(),
            x.second(),
            x.microsecond(),
        )
    }
}

/// Converts to UTC first. Fails if that moves the date outside of `time`'s range.
impl TryFrom<OffsetDateTime> for Smalltime {
    type Error = Error;

    fn try_from(x: OffsetDateTime) -> Result<Self, Error> {
        let utc = x
            .checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| error("date out of range"))?;
        Ok(Smalltime::from(PrimitiveDateTime::new(utc.date(), utc.time())))
    }
}

impl TryFrom<Smalltime> for PrimitiveDateTime {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        t.validate()?;
        if t.second() == 60 {
            return err("leap second");
        }
        let date = Date::from_ordinal_date(t.year(), t.day_of_year())
            .map_err(|_| error("date out of range"))?;
        let time = Time::from_hms_micro(t.hour(), t.minute(), t.second(), t.microsecond())
            .map_err(|_| error("time out of range"))?;
        Ok(PrimitiveDateTime::new(date, time))
    }
}

impl TryFrom<Smalltime> for OffsetDateTime {
    type Error = Error;

    fn try_from(t: Smalltime) -> Result<Self, Error> {
        PrimitiveDateTime::try_from(t).map(PrimitiveDateTime::assume_utc)
    }
}
