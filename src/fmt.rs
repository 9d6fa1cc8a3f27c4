use crate::Smalltime;
use core::fmt::{Debug, Display, Formatter, Result};

/// ISO 8601, e.g. `1985-10-26T08:22:16.900142Z`. Years outside 0 - 9999 are written with a sign and
/// at least 6 digits (`-000044-03-15T...`). Fields are printed as stored, without validation.
impl Display for Smalltime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let year = self.year();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            write!(f, "{year:+07}")?;
        }
        let (month, day) = self.month_day();
        write!(
            f,
            "-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:06}Z",
            self.hour(),
            self.minute(),
            self.second(),
            self.microsecond()
        )
    }
}

impl Debug for Smalltime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Smalltime({self})")
    }
}
