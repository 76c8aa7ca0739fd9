// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use crate::calendar::{format_date, validate_iso_date, validate_time, year_of};

#[test]
fn test_year_of_extracts_year_by_slicing() {
    assert_eq!(year_of("2024-11-05").unwrap(), 2024);
    assert_eq!(year_of("1999-01-01").unwrap(), 1999);
}

#[test]
fn test_year_of_is_unaffected_by_day_and_month() {
    // December 31st and January 1st of the same year extract the same year;
    // a time-zone-shifting implementation would get one of these wrong.
    assert_eq!(year_of("2023-12-31").unwrap(), 2023);
    assert_eq!(year_of("2023-01-01").unwrap(), 2023);
}

#[test]
fn test_year_of_rejects_malformed_dates() {
    for bad in ["2024/11/05", "2024-11", "05-11-2024", "", "2024-13-01", "abcd-11-05"] {
        let result = year_of(bad);
        assert!(
            matches!(result, Err(DomainError::InvalidDate { .. })),
            "expected InvalidDate for {bad:?}"
        );
    }
}

#[test]
fn test_validate_iso_date_rejects_out_of_range_day() {
    assert!(validate_iso_date("2024-02-00").is_err());
    assert!(validate_iso_date("2024-02-32").is_err());
    assert!(validate_iso_date("2024-02-28").is_ok());
}

#[test]
fn test_format_date_zero_pads() {
    let date = time::Date::from_calendar_date(2024, time::Month::March, 5).unwrap();
    assert_eq!(format_date(date), "2024-03-05");
}

#[test]
fn test_format_then_year_of_round_trips() {
    let date = time::Date::from_calendar_date(2031, time::Month::December, 31).unwrap();
    assert_eq!(year_of(&format_date(date)).unwrap(), 2031);
}

#[test]
fn test_validate_time() {
    assert!(validate_time("09:30").is_ok());
    assert!(validate_time("23:59").is_ok());
    assert!(validate_time("24:00").is_err());
    assert!(validate_time("12:60").is_err());
    assert!(validate_time("9:30").is_err());
}

#[test]
fn test_iso_strings_compare_in_calendar_order() {
    // The reactivation sweep relies on lexicographic comparison of ISO dates.
    assert!("2024-01-31" < "2024-02-01");
    assert!("2024-12-31" < "2025-01-01");
}
