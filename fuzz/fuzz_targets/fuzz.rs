#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate smalltime;
use smalltime::Smalltime;

/// Every bit pattern must survive being taken apart and put back together.
#[inline(never)]
fn test_repack(t: Smalltime) {
    let repacked = Smalltime::new_with_day_of_year(
        t.year(),
        t.day_of_year(),
        t.hour(),
        t.minute(),
        t.second(),
        t.microsecond(),
    );
    assert_eq!(repacked, t);

    // Printing must not panic, even for invalid fields.
    let _ = t.to_string();
}

/// A valid value must convert to `H` and back losslessly, if `H` can represent it at all.
#[inline(never)]
fn test_host<H: TryFrom<Smalltime>>(t: Smalltime)
where
    Smalltime: From<H>,
{
    if let Ok(host) = H::try_from(t) {
        assert!(t.is_valid());
        assert_eq!(Smalltime::from(host), t);
    }
}

/// Checked and unchecked construction must agree whenever the checked one succeeds.
#[inline(never)]
fn test_checked(t: Smalltime) {
    let checked = Smalltime::try_new_with_day_of_year(
        t.year(),
        t.day_of_year(),
        t.hour(),
        t.minute(),
        t.second(),
        t.microsecond(),
    );
    assert_eq!(checked.is_ok(), t.is_valid());
    if let Ok(checked) = checked {
        assert_eq!(checked, t);
        let (month, day) = t.month_day();
        assert_eq!(
            Smalltime::try_new(
                t.year(),
                month,
                day,
                t.hour(),
                t.minute(),
                t.second(),
                t.microsecond()
            ),
            Ok(t)
        );
    }
}

fuzz_target!(|data: [u8; 9]| {
    let [selector, bits @ ..] = data;
    let t = Smalltime::from_le_bytes(bits);
    match selector % 5 {
        0 => test_repack(t),
        1 => test_checked(t),
        2 => test_host::<chrono::NaiveDateTime>(t),
        3 => test_host::<jiff::civil::DateTime>(t),
        _ => test_host::<time::PrimitiveDateTime>(t),
    }
});
