// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod calendar;
mod eligibility;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use eligibility::{IneligibilityCause, MIN_JURY_AGE, evaluate_eligibility, is_eligible};
pub use error::DomainError;
pub use types::{
    AssignmentRole, Ballot, BallotStatus, Cpf, Draw, DrawAssignment, DrawStatus, InactivityReason,
    Judge, JudgeStatus, Juror, JurorStatus,
};
pub use validation::{
    MAX_PANEL_SIZE, validate_draw_fields, validate_judge_fields, validate_juror_fields,
    validate_panel_size,
};
