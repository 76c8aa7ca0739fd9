// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-zone-free calendar helpers for ISO `YYYY-MM-DD` date strings.
//!
//! All stored dates in this system are plain calendar dates. The year of a
//! date is extracted by slicing the string, never by constructing a
//! time-zone-aware date value: a date object built in the wrong zone can
//! shift a date across a year boundary and silently break the age and rest
//! rules. This is a deliberate policy, not an optimization.
//!
//! ISO date strings of equal length compare lexicographically in calendar
//! order, so `&str` comparison is also the ordering used for "on or before
//! today" checks.

use crate::error::DomainError;

/// Validates that a string is a well-formed `YYYY-MM-DD` calendar date.
///
/// The check is structural: four digits, dash, two digits, dash, two digits,
/// with the month in 1–12 and the day in 1–31. Month-length and leap-year
/// precision is not required for year extraction and is left to the caller
/// where it matters.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string does not have the
/// expected shape.
pub fn validate_iso_date(date: &str) -> Result<(), DomainError> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DomainError::InvalidDate {
            date_string: date.to_string(),
            reason: String::from("expected YYYY-MM-DD"),
        });
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(DomainError::InvalidDate {
            date_string: date.to_string(),
            reason: String::from("expected YYYY-MM-DD"),
        });
    }

    let month = two_digit_value(bytes[5], bytes[6]);
    let day = two_digit_value(bytes[8], bytes[9]);
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidDate {
            date_string: date.to_string(),
            reason: format!("month {month} is out of range"),
        });
    }
    if !(1..=31).contains(&day) {
        return Err(DomainError::InvalidDate {
            date_string: date.to_string(),
            reason: format!("day {day} is out of range"),
        });
    }
    Ok(())
}

/// Extracts the calendar year of an ISO `YYYY-MM-DD` date string.
///
/// The year is taken from the first four characters after shape validation.
/// No date object is constructed and no time zone is consulted.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string is not a well-formed
/// ISO date.
pub fn year_of(date: &str) -> Result<i32, DomainError> {
    validate_iso_date(date)?;
    date[..4]
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidDate {
            date_string: date.to_string(),
            reason: String::from("year is not numeric"),
        })
}

/// Formats a `time::Date` as an ISO `YYYY-MM-DD` string.
///
/// The inverse direction (parsing a stored string back into a `time::Date`)
/// is intentionally not offered; stored dates stay strings.
#[must_use]
pub fn format_date(date: time::Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Validates a `HH:MM` time-of-day string.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the string is not a valid
/// 24-hour `HH:MM` value.
pub fn validate_time(value: &str) -> Result<(), DomainError> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !shape_ok {
        return Err(DomainError::InvalidTime(value.to_string()));
    }
    let hour = two_digit_value(bytes[0], bytes[1]);
    let minute = two_digit_value(bytes[3], bytes[4]);
    if hour > 23 || minute > 59 {
        return Err(DomainError::InvalidTime(value.to_string()));
    }
    Ok(())
}

const fn two_digit_value(tens: u8, units: u8) -> u8 {
    (tens - b'0') * 10 + (units - b'0')
}
