// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod calendar;

use crate::{Cpf, Juror};

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
        cpf_from_base(100_000_000 + seed),
        String::from(name),
        Some(String::from("1980-05-20")),
    )
}
