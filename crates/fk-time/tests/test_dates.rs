//! Property tests for date arithmetic and the Easter algorithm.

use fk_time::{easter_sunday, Date, DateFormat, FormattedDate, Weekday};
use proptest::prelude::*;

proptest! {
    /// (year, month, day) -> serial -> (year, month, day) is the identity.
    #[test]
    fn ymd_serial_roundtrip(y in 1583u16..=4099, m in 1u8..=12, d in 1u8..=28) {
        let date = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(date.ymd(), (y, m, d));
        prop_assert_eq!(Date::from_serial(date.serial()).unwrap(), date);
    }

    /// Adding n days then subtracting n days is the identity, across
    /// arbitrary month and year boundaries.
    #[test]
    fn add_days_inverts(y in 1700u16..=3980, m in 1u8..=12, d in 1u8..=28, n in -40_000i32..=40_000) {
        let date = Date::from_ymd(y, m, d).unwrap();
        let shifted = date.add_days(n).unwrap();
        prop_assert_eq!(shifted.add_days(-n).unwrap(), date);
        prop_assert_eq!(date.days_between(shifted), n);
    }

    /// Consecutive serials are consecutive days: weekdays cycle with
    /// period 7.
    #[test]
    fn weekday_cycles(y in 1583u16..=4098, m in 1u8..=12, d in 1u8..=28) {
        let date = Date::from_ymd(y, m, d).unwrap();
        let next = date + 7;
        prop_assert_eq!(date.weekday(), next.weekday());
        prop_assert_ne!(date.weekday(), (date + 1).weekday());
    }

    /// Easter Sunday is a Sunday between March 22 and April 25, every year.
    #[test]
    fn easter_bounds(year in 1583u16..=4099) {
        let e = easter_sunday(year).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= Date::from_ymd(year, 3, 22).unwrap());
        prop_assert!(e <= Date::from_ymd(year, 4, 25).unwrap());
    }

    /// German formatting and parsing invert each other.
    #[test]
    fn german_format_roundtrip(y in 1583u16..=4099, m in 1u8..=12, d in 1u8..=28) {
        let date = Date::from_ymd(y, m, d).unwrap();
        let FormattedDate::Text(text) = date.format(DateFormat::German) else {
            panic!("German format must render text");
        };
        prop_assert_eq!(Date::parse_german(&text).unwrap(), date);
    }
}

#[test]
fn known_easter_dates() {
    let expected = [
        (1583, 4, 10),
        (1818, 3, 22),
        (1943, 4, 25),
        (2000, 4, 23),
        (2016, 3, 27),
        (2024, 3, 31),
        (2025, 4, 20),
        (2038, 4, 25),
    ];
    for (y, m, d) in expected {
        let e = easter_sunday(y).unwrap();
        assert_eq!(e.ymd(), (y, m, d), "easter mismatch for {y}");
    }
}

#[test]
fn serial_is_contiguous_across_year_end() {
    let dec31 = Date::from_ymd(2024, 12, 31).unwrap();
    let jan1 = Date::from_ymd(2025, 1, 1).unwrap();
    assert_eq!(jan1 - dec31, 1);
}
