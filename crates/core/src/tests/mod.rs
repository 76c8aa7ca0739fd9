// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod ballot_tests;

use crate::{Clock, FixedClock};
use jurado_domain::{Cpf, Judge, JudgeStatus, Juror};

/// Builds a valid CPF from a 9-digit base by computing both check digits.
pub fn cpf_from_base(base: u32) -> Cpf {
    let mut digits: Vec<u32> = format!("{base:09}")
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    for start_weight in [10_u32, 11] {
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (start_weight - u32::try_from(i).unwrap()))
            .sum();
        digits.push((sum * 10) % 11 % 10);
    }
    let value: String = digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect();
    Cpf::new(&value).unwrap()
}

pub fn create_test_juror(seed: u32, name: &str) -> Juror {
    Juror::new(
        cpf_from_base(200_000_000 + seed),
        String::from(name),
        Some(String::from("1975-08-14")),
    )
}

pub fn create_test_judge(judge_id: i64, name: &str, is_titular: bool, status: JudgeStatus) -> Judge {
    Judge {
        judge_id: Some(judge_id),
        name: String::from(name),
        is_titular,
        status,
    }
}

/// A clock frozen at 2024-06-15, so `current_year` is 2024.
pub fn create_test_clock() -> FixedClock {
    let date = time::Date::from_calendar_date(2024, time::Month::June, 15).unwrap();
    FixedClock::new(date)
}

#[test]
fn test_fixed_clock_reports_frozen_date() {
    let clock = create_test_clock();
    assert_eq!(clock.current_year(), 2024);
    assert_eq!(clock.today_iso(), "2024-06-15");
}
