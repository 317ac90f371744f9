//! Easter Sunday computation (Spencer's algorithm).

use crate::date::Date;
use fk_core::errors::Result;

/// Compute the date of Easter Sunday for `year`.
///
/// Uses Spencer's closed-form algorithm (the "anonymous Gregorian
/// algorithm"): integer arithmetic only, no table lookups.  The result
/// always falls between March 22 and April 25.
///
/// # Errors
/// The formula itself is total; an error is only returned when `year` is
/// outside the supported [`Date`] range (1583–4099).
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f - 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn easter(year: u16) -> (u16, u8, u8) {
        easter_sunday(year).unwrap().ymd()
    }

    #[test]
    fn reference_years() {
        assert_eq!(easter(2000), (2000, 4, 23));
        assert_eq!(easter(2016), (2016, 3, 27));
        assert_eq!(easter(2024), (2024, 3, 31));
        assert_eq!(easter(2025), (2025, 4, 20));
    }

    #[test]
    fn earliest_and_latest_possible() {
        // 1818: March 22, the earliest Easter can fall
        assert_eq!(easter(1818), (1818, 3, 22));
        // 1943: April 25, the latest
        assert_eq!(easter(1943), (1943, 4, 25));
    }

    #[test]
    fn always_a_sunday() {
        for year in [1583, 1700, 1900, 2000, 2024, 2100, 4099] {
            let e = easter_sunday(year).unwrap();
            assert_eq!(e.weekday(), Weekday::Sunday, "easter {year} not a Sunday");
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(easter_sunday(1582).is_err());
        assert!(easter_sunday(4100).is_err());
    }
}
