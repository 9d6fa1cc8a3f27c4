//! Proleptic Gregorian calendar arithmetic.
//!
//! Months are counted from March internally so that February, the only month whose length
//! varies, falls at the end of the year and the cumulative day count of every other month is the
//! same in every year.
//!
//! None of these functions validate their input. A date that doesn't exist (February 30th, day
//! 366 of a common year) still yields a number, it just isn't meaningful.

/// Returns true if `year` has a February 29th. Year 0 is a leap year.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in `year`, 365 or 366.
#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// The number of days in `month` (1 - 12) of `year`, or 0 if `month` isn't a month.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days from March 1st to the first of the month, for a month counted from March (0 - 11).
#[inline(always)]
const fn days_before_month_from_march(months_from_march: i32) -> i32 {
    (153 * months_from_march + 2) / 5
}

/// Converts a month (1 - 12) and day (1 - 31) of `year` to a day of the year (1 - 366).
#[inline]
pub const fn ymd_to_doy(year: i32, month: u8, day: u8) -> u16 {
    let months_from_march = (month as i32 + 9) % 12; // [0, 11]
    let days_from_march = days_before_month_from_march(months_from_march) + day as i32 - 1;
    let doy = if is_leap_year(year) {
        (days_from_march + 60) % 366
    } else {
        (days_from_march + 59) % 365
    };
    (doy + 1) as u16
}

/// Converts a day of `year` (1 - 366) to a month (1 - 12) and day (1 - 31).
#[inline]
pub const fn doy_to_ymd(year: i32, day_of_year: u16) -> (u8, u8) {
    let days_from_march = if is_leap_year(year) {
        (day_of_year as i32 + 305) % 366
    } else {
        (day_of_year as i32 + 305) % 365
    };
    let months_from_march = (5 * days_from_march + 2) / 153; // [0, 11]
    let day = days_from_march - days_before_month_from_march(months_from_march) + 1;
    let month = (months_from_march + 2) % 12 + 1;
    (month as u8, day as u8)
}
