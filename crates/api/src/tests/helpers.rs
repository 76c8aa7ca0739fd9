// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API tests.

use jurado::FixedClock;
use jurado_persistence::Persistence;
use time::{Date, Month};

use crate::request_response::{CreateDrawRequest, RegisterJurorRequest};

/// A clock frozen at 2024-06-15 for deterministic lifecycle behavior.
pub fn test_clock() -> FixedClock {
    let date = Date::from_calendar_date(2024, Month::June, 15).unwrap();
    FixedClock::new(date)
}

/// A fresh in-memory store for one test.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Builds a valid CPF string from a 9-digit base by computing check digits.
pub fn test_cpf(base: u32) -> String {
    let mut digits: Vec<u32> = format!("{:09}", 400_000_000 + base)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let d1 = check_digit(&digits, 10);
    digits.push(d1);
    let d2 = check_digit(&digits, 11);
    digits.push(d2);

    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (start_weight - u32::try_from(i).unwrap()))
        .sum();
    (sum * 10) % 11 % 10
}

/// A registration request for an adult juror born in 1980.
pub fn juror_request(base: u32, name: &str) -> RegisterJurorRequest {
    RegisterJurorRequest {
        cpf: test_cpf(base),
        name: String::from(name),
        birth_date: Some(String::from("1980-05-20")),
        institution_id: None,
    }
}

/// A draw request for the 2024 reference year.
pub fn draw_request() -> CreateDrawRequest {
    CreateDrawRequest {
        reference_year: 2024,
        draw_date: String::from("2024-10-01"),
        sitting_date: String::from("2024-11-05"),
        sitting_time: Some(String::from("09:00")),
        judge_id: None,
    }
}
