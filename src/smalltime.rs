use crate::calendar::{days_in_year, doy_to_ymd, ymd_to_doy};
use crate::layout::{DAY_OF_YEAR, HOUR, MICROSECOND, MINUTE, SECOND, YEAR};
use bytemuck::{Pod, Zeroable};

/// A UTC date and time with microsecond resolution, packed into a 64-bit signed integer.
///
/// | Field       | Bits | Shift |
/// |-------------|------|-------|
/// | year        | 18   | 46    |
/// | day of year | 9    | 37    |
/// | hour        | 5    | 32    |
/// | minute      | 6    | 26    |
/// | second      | 6    | 20    |
/// | microsecond | 20   | 0     |
///
/// Fields are stored most significant first, so comparing the integers compares the instants.
/// Years use astronomical numbering in the proleptic Gregorian calendar: 1 = 1 AD, 0 = 1 BC,
/// -1 = 2 BC, ...
///
/// # Truncation
/// Construction and the `with_*` methods do not validate input. A field value that doesn't fit
/// in its bits keeps only its low bits (e.g. hour 33 is stored as hour 1). A calendar date that
/// doesn't exist is still converted arithmetically (February 30th becomes March 1st or 2nd). Use
/// [`Smalltime::try_new`] when input isn't trusted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Smalltime(i64);

// Safety: Smalltime is #[repr(transparent)] over i64 and every i64 is a valid Smalltime.
unsafe impl Zeroable for Smalltime {}
unsafe impl Pod for Smalltime {}

impl Smalltime {
    /// The smallest encodable year.
    pub const MIN_YEAR: i32 = -(1 << (YEAR.width - 1));
    /// The largest encodable year.
    pub const MAX_YEAR: i32 = (1 << (YEAR.width - 1)) - 1;

    /// The earliest valid instant, `-131072-01-01T00:00:00.000000Z`.
    pub const MIN: Self = Self::new_with_day_of_year(Self::MIN_YEAR, 1, 0, 0, 0, 0);
    /// The latest valid instant, `131071-12-31T23:59:60.999999Z` (a leap second).
    pub const MAX: Self = Self::new_with_day_of_year(
        Self::MAX_YEAR,
        days_in_year(Self::MAX_YEAR),
        23,
        59,
        60,
        999_999,
    );

    /// Encodes a calendar date and time.
    ///
    /// Input is NOT validated, see [truncation](Self#truncation).
    /// - `year`: -131072 to 131071.
    /// - `month`: 1 to 12.
    /// - `day`: 1 to 31.
    /// - `hour`: 0 to 23.
    /// - `minute`: 0 to 59.
    /// - `second`: 0 to 60, 60 being a leap second.
    /// - `microsecond`: 0 to 999999.
    #[inline]
    pub const fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self::new_with_day_of_year(
            year,
            ymd_to_doy(year, month, day),
            hour,
            minute,
            second,
            microsecond,
        )
    }

    /// Encodes a date given as a day of the year (1 to 366) and a time. Same ranges as
    /// [`Smalltime::new`].
    #[inline]
    pub const fn new_with_day_of_year(
        year: i32,
        day_of_year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self::from_raw(
            YEAR.pack(year as u64)
                | DAY_OF_YEAR.pack(day_of_year as u64)
                | HOUR.pack(hour as u64)
                | MINUTE.pack(minute as u64)
                | SECOND.pack(second as u64)
                | MICROSECOND.pack(microsecond as u64),
        )
    }

    /// Reinterprets an encoded value. Every `i64` is accepted.
    #[inline(always)]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// The encoded value.
    #[inline(always)]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    #[inline(always)]
    const fn from_raw(raw: u64) -> Self {
        Self(raw as i64)
    }

    #[inline(always)]
    const fn raw(self) -> u64 {
        self.0 as u64
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(i64::from_be_bytes(bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(i64::from_le_bytes(bytes))
    }

    /// Views encoded values without copying.
    pub fn slice_as_bits(slice: &[Self]) -> &[i64] {
        bytemuck::must_cast_slice(slice)
    }

    /// Views encoded values as timestamps without copying.
    pub fn slice_from_bits(bits: &[i64]) -> &[Self] {
        bytemuck::must_cast_slice(bits)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        YEAR.unpack_signed(self.raw()) as i32
    }

    /// The stored day of the year, nominally 1 to 366.
    #[inline]
    pub const fn day_of_year(self) -> u16 {
        DAY_OF_YEAR.unpack(self.raw()) as u16
    }

    /// The month (1 to 12) and day (1 to 31), derived from [`Self::day_of_year`].
    #[inline]
    pub const fn month_day(self) -> (u8, u8) {
        doy_to_ymd(self.year(), self.day_of_year())
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month_day().0
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.month_day().1
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        HOUR.unpack(self.raw()) as u8
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        MINUTE.unpack(self.raw()) as u8
    }

    #[inline]
    pub const fn second(self) -> u8 {
        SECOND.unpack(self.raw()) as u8
    }

    #[inline]
    pub const fn microsecond(self) -> u32 {
        MICROSECOND.unpack(self.raw()) as u32
    }

    /// Replaces the year, keeping the day of the year. Dec 31st of a leap year (day 366) moved to
    /// a common year reads back as Jan 1st.
    #[inline]
    pub const fn with_year(self, year: i32) -> Self {
        Self::from_raw(YEAR.replace(self.raw(), year as u64))
    }

    #[inline]
    pub const fn with_day_of_year(self, day_of_year: u16) -> Self {
        Self::from_raw(DAY_OF_YEAR.replace(self.raw(), day_of_year as u64))
    }

    /// Replaces the month, keeping the day of the month.
    #[inline]
    pub const fn with_month(self, month: u8) -> Self {
        let year = self.year();
        self.with_day_of_year(ymd_to_doy(year, month, self.day()))
    }

    /// Replaces the day of the month, keeping the month.
    #[inline]
    pub const fn with_day(self, day: u8) -> Self {
        let year = self.year();
        self.with_day_of_year(ymd_to_doy(year, self.month(), day))
    }

    #[inline]
    pub const fn with_hour(self, hour: u8) -> Self {
        Self::from_raw(HOUR.replace(self.raw(), hour as u64))
    }

    #[inline]
    pub const fn with_minute(self, minute: u8) -> Self {
        Self::from_raw(MINUTE.replace(self.raw(), minute as u64))
    }

    #[inline]
    pub const fn with_second(self, second: u8) -> Self {
        Self::from_raw(SECOND.replace(self.raw(), second as u64))
    }

    #[inline]
    pub const fn with_microsecond(self, microsecond: u32) -> Self {
        Self::from_raw(MICROSECOND.replace(self.raw(), microsecond as u64))
    }
}

impl From<i64> for Smalltime {
    fn from(bits: i64) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Smalltime> for i64 {
    fn from(time: Smalltime) -> Self {
        time.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::Smalltime;
    use crate::calendar::{days_in_month, days_in_year};
    use std::vec::Vec;

    #[track_caller]
    fn assert_fields(t: Smalltime, expected: (i32, u8, u8, u8, u8, u8, u32)) {
        let actual = (
            t.year(),
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.microsecond(),
        );
        assert_eq!(actual, expected, "{:#018x}", t.to_bits());
    }

    fn assert_encode_decode(year: i32, month: u8, day: u8, h: u8, mi: u8, s: u8, us: u32) {
        let t = Smalltime::new(year, month, day, h, mi, s, us);
        assert_fields(t, (year, month, day, h, mi, s, us));
    }

    #[test]
    fn readme_examples() {
        let vectors = [
            (0x1f06568590dbc2e, (1985, 10, 26, 8, 22, 16, 900142), 299),
            (0x1f06588590dbc2e, (1985, 10, 27, 8, 22, 16, 900142), 300),
            (0x1f06568550dbc2e, (1985, 10, 26, 8, 21, 16, 900142), 299),
            (0x13487072091e240, (1234, 2, 25, 7, 8, 9, 123456), 56),
        ];
        for (bits, fields, doy) in vectors {
            let t = Smalltime::from_bits(bits);
            assert_fields(t, fields);
            assert_eq!(t.day_of_year(), doy);

            let (year, month, day, h, mi, s, us) = fields;
            assert_eq!(Smalltime::new(year, month, day, h, mi, s, us).to_bits(), bits);
            assert_eq!(
                Smalltime::new_with_day_of_year(year, doy, h, mi, s, us).to_bits(),
                bits
            );
        }
    }

    #[test]
    fn every_day_for_409_years() {
        for year in 1999..=2408 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    assert_encode_decode(year, month, day, 0, 0, 0, 0);
                    assert_encode_decode(year, month, day, 23, 59, 59, 999_999);
                }
            }
        }
    }

    #[test]
    fn every_year() {
        for year in Smalltime::MIN_YEAR..=Smalltime::MAX_YEAR {
            assert_encode_decode(year, 1, 11, 11, 11, 11, 111_111);
            assert_encode_decode(year, 12, 31, 0, 0, 0, 0);
            if days_in_year(year) == 366 {
                assert_encode_decode(year, 2, 29, 12, 30, 30, 500_000);
            }
        }
    }

    #[test]
    fn every_microsecond() {
        let base = Smalltime::new(2000, 1, 11, 11, 11, 11, 0);
        for us in 0..1_000_000 {
            let t = Smalltime::new(2000, 1, 11, 11, 11, 11, us);
            assert_fields(t, (2000, 1, 11, 11, 11, 11, us));
            assert_eq!(t.to_bits() - base.to_bits(), us as i64);
        }
    }

    macro_rules! field_sweep {
        ($($field:ident: $range:expr),+) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<sweep_ $field>]() {
                        let base = Smalltime::new(2000, 1, 11, 11, 11, 11, 111_111);
                        for v in $range {
                            let t = base.[<with_ $field>](v);
                            assert_eq!(t.$field(), v);
                            assert_eq!(t.[<with_ $field>](base.$field()), base);
                        }
                    }
                )+
            }
        }
    }
    field_sweep!(
        year: Smalltime::MIN_YEAR..=Smalltime::MAX_YEAR,
        day_of_year: 1..=366u16,
        month: 1..=12u8,
        day: 1..=31u8,
        hour: 0..24u8,
        minute: 0..60u8,
        second: 0..=60u8,
        microsecond: 0..1_000_000u32
    );

    #[test]
    fn piecemeal() {
        let t = Smalltime::from_bits(0)
            .with_year(2018)
            .with_day_of_year(1)
            .with_month(12)
            .with_day(31)
            .with_hour(14)
            .with_minute(30)
            .with_second(19)
            .with_microsecond(885);
        assert_eq!(t, Smalltime::new(2018, 12, 31, 14, 30, 19, 885));
        assert_eq!(t.day_of_year(), 365);
    }

    #[test]
    fn with_month_keeps_day() {
        let t = Smalltime::new(2000, 1, 31, 0, 0, 0, 0);
        let t = t.with_month(3);
        assert_eq!((t.month(), t.day()), (3, 31));
        // No February 31st, so the day spills into March.
        let t = t.with_month(2);
        assert_eq!((t.month(), t.day()), (3, 2));
    }

    #[test]
    fn with_year_keeps_day_of_year() {
        let t = Smalltime::new(2000, 12, 31, 0, 0, 0, 0).with_year(2001);
        assert_eq!(t.day_of_year(), 366);
        assert_eq!((t.month(), t.day()), (1, 1));
    }

    #[test]
    fn comparisons() {
        let pairs = [
            ((2000, 1, 1, 0, 0, 0, 1), (2000, 1, 1, 0, 0, 0, 0)),
            ((2000, 1, 1, 0, 0, 1, 0), (2000, 1, 1, 0, 0, 0, 999_999)),
            ((2000, 1, 1, 0, 0, 2, 0), (2000, 1, 1, 0, 0, 1, 0)),
            ((2000, 1, 1, 0, 1, 0, 0), (2000, 1, 1, 0, 0, 60, 0)),
            ((2000, 1, 1, 0, 2, 0, 0), (2000, 1, 1, 0, 1, 0, 0)),
            ((2000, 1, 1, 1, 0, 0, 0), (2000, 1, 1, 0, 59, 0, 0)),
            ((2000, 1, 1, 2, 0, 0, 0), (2000, 1, 1, 1, 0, 0, 0)),
            ((2000, 1, 2, 0, 0, 0, 0), (2000, 1, 1, 23, 0, 0, 0)),
            ((2000, 1, 2, 0, 0, 0, 0), (2000, 1, 1, 0, 0, 0, 0)),
            ((2000, 3, 1, 0, 0, 0, 0), (2000, 2, 29, 23, 59, 59, 999_999)),
            ((2005, 1, 1, 0, 0, 0, 0), (2004, 12, 31, 0, 0, 0, 0)),
            ((1, 1, 1, 0, 0, 0, 0), (0, 1, 1, 0, 0, 0, 0)),
            ((0, 1, 1, 0, 0, 0, 0), (-1, 1, 1, 0, 0, 0, 0)),
            ((1, 1, 1, 0, 0, 0, 0), (-1, 1, 1, 0, 0, 0, 0)),
            ((-1, 1, 1, 0, 0, 0, 0), (-2, 12, 31, 23, 59, 59, 999_999)),
        ];
        for (later, earlier) in pairs {
            let (y, m, d, h, mi, s, us) = later;
            let later = Smalltime::new(y, m, d, h, mi, s, us);
            let (y, m, d, h, mi, s, us) = earlier;
            let earlier = Smalltime::new(y, m, d, h, mi, s, us);
            assert!(later > earlier, "{later:?} <= {earlier:?}");
            assert!(later.to_bits() > earlier.to_bits());
        }
    }

    #[test]
    fn sorted_bits_are_sorted_instants() {
        let mut times: Vec<Smalltime> = crate::random_data(1000)
            .into_iter()
            .map(|(y, doy, h, mi, s, us): (i32, u16, u8, u8, u8, u32)| {
                let year = y % (Smalltime::MAX_YEAR + 1);
                let doy = doy % days_in_year(year) + 1;
                Smalltime::new_with_day_of_year(year, doy, h % 24, mi % 60, s % 60, us % 1_000_000)
            })
            .collect();
        times.sort();
        for pair in times.windows(2) {
            let [a, b] = [pair[0], pair[1]];
            let key = |t: Smalltime| {
                (t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second(), t.microsecond())
            };
            assert!(key(a) <= key(b), "{a:?} > {b:?}");
        }
    }

    #[test]
    fn every_bit_pattern_repacks() {
        let mut bits: Vec<i64> = crate::random_data(10_000);
        bits.extend([0, -1, i64::MIN, i64::MAX]);
        for bits in bits {
            let t = Smalltime::from_bits(bits);
            let repacked = Smalltime::new_with_day_of_year(
                t.year(),
                t.day_of_year(),
                t.hour(),
                t.minute(),
                t.second(),
                t.microsecond(),
            );
            assert_eq!(repacked.to_bits(), bits);
        }
    }

    #[test]
    fn out_of_range_truncates() {
        let t = Smalltime::new(2000, 1, 1, 33, 0, 0, 0);
        assert_eq!(t.hour(), 1);
        assert_eq!(t.year(), 2000);

        let t = Smalltime::new(2000, 1, 1, 0, 0, 0, 1_048_576 + 5);
        assert_eq!(t.microsecond(), 5);
        assert_eq!(t.second(), 0);

        let t = Smalltime::new(2000, 1, 1, 0, 0, 0, 0).with_year(Smalltime::MAX_YEAR + 1);
        assert_eq!(t.year(), Smalltime::MIN_YEAR);
        assert_eq!(t.day_of_year(), 1);
    }

    #[test]
    fn min_max() {
        assert_eq!(Smalltime::MIN_YEAR, -131072);
        assert_eq!(Smalltime::MAX_YEAR, 131071);
        assert_fields(Smalltime::MIN, (-131072, 1, 1, 0, 0, 0, 0));
        assert_fields(Smalltime::MAX, (131071, 12, 31, 23, 59, 60, 999_999));
        assert!(Smalltime::MIN < Smalltime::new(-131072, 1, 1, 0, 0, 0, 1));
        assert!(Smalltime::MAX > Smalltime::new(131071, 12, 31, 23, 59, 59, 999_999));
    }

    #[test]
    fn bytes() {
        let t = Smalltime::from_bits(0x1f06568590dbc2e);
        assert_eq!(
            t.to_be_bytes(),
            [0x01, 0xf0, 0x65, 0x68, 0x59, 0x0d, 0xbc, 0x2e]
        );
        assert_eq!(Smalltime::from_be_bytes(t.to_be_bytes()), t);
        assert_eq!(Smalltime::from_le_bytes(t.to_le_bytes()), t);
        assert_eq!(i64::from(t), 0x1f06568590dbc2e);
        assert_eq!(Smalltime::from(0x1f06568590dbc2e), t);
    }

    #[test]
    fn zero_copy_slices() {
        let times = [Smalltime::MIN, Smalltime::from_bits(0x1f06568590dbc2e), Smalltime::MAX];
        let bits = Smalltime::slice_as_bits(&times);
        assert_eq!(bits[1], 0x1f06568590dbc2e);
        assert_eq!(Smalltime::slice_from_bits(bits), &times);

        let bytes: &[u8] = bytemuck::cast_slice(&times);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[8..16], &times[1].to_bits().to_ne_bytes()[..]);
    }
}
