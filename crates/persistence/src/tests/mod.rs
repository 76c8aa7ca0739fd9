// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod draw_tests;
mod juror_tests;

use jurado_domain::{Cpf, Draw, Judge, JudgeStatus, Juror};

/// The frozen "current year" used across persistence tests.
pub const TEST_YEAR: i32 = 2024;

/// Builds a valid CPF from a 9-digit base by computing both check digits.
pub fn cpf_from_base(base: u32) -> Cpf {
    let mut digits: Vec<u32> = format!("{base:09}")
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let d1 = test_check_digit(&digits, 10);
    digits.push(d1);
    let d2 = test_check_digit(&digits, 11);
    digits.push(d2);

    let value: String = digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect();
    Cpf::new(&value).unwrap()
}

fn test_check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (start_weight - u32::try_from(i).unwrap()))
        .sum();
    (sum * 10) % 11 % 10
}

/// Creates an active test juror with a unique CPF derived from `seed`.
pub fn create_test_juror(seed: u32, name: &str) -> Juror {
    Juror::new(
        cpf_from_base(300_000_000 + seed),
        String::from(name),
        Some(String::from("1980-05-20")),
    )
}

/// Creates a test judge without a persisted id.
pub fn create_test_judge(name: &str, is_titular: bool, status: JudgeStatus) -> Judge {
    Judge::new(String::from(name), is_titular, status)
}

/// Creates a scheduled test draw for the given reference year.
pub fn create_test_draw(reference_year: u16) -> Draw {
    Draw::new(
        reference_year,
        String::from("2024-10-01"),
        String::from("2024-11-05"),
        Some(String::from("09:00")),
        None,
    )
}
