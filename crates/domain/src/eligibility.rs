// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draw eligibility rules.
//!
//! A juror is eligible to be drawn for a reference year when all of the
//! following hold:
//!
//! - The record is `Active`.
//! - **Age rule**: if the birth date is known, the birth year is at most
//!   `reference_year - 18` (the juror turns 18 during or before the
//!   reference year). An unknown birth date never disqualifies.
//! - **Rest rule**: if a last-service date is known, its year is strictly
//!   less than `reference_year - 1`. A juror who served in the reference
//!   year or the year before it is excluded; one full calendar year of rest
//!   is mandatory. An unknown last-service date never disqualifies.
//!
//! Years are compared as whole calendar years; day and month never affect
//! the outcome. All functions here are pure and perform no I/O.

use crate::calendar;
use crate::error::DomainError;
use crate::types::{Juror, JurorStatus};

/// The minimum age for jury duty, in whole calendar years.
pub const MIN_JURY_AGE: i32 = 18;

/// The specific rule that excluded a juror from a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibilityCause {
    /// The juror record is not `Active`.
    Inactive,
    /// The juror does not reach the minimum age within the reference year.
    UnderAge {
        /// The juror's birth year.
        birth_year: i32,
        /// The latest birth year still eligible for the reference year.
        latest_eligible_birth_year: i32,
    },
    /// The juror served too recently to be drawn again.
    RecentService {
        /// The year of the juror's most recent service.
        service_year: i32,
        /// The first reference year this juror becomes eligible again.
        eligible_from: i32,
    },
}

impl std::fmt::Display for IneligibilityCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => write!(f, "juror record is inactive"),
            Self::UnderAge {
                birth_year,
                latest_eligible_birth_year,
            } => {
                write!(
                    f,
                    "born {birth_year}, must be born in or before {latest_eligible_birth_year}"
                )
            }
            Self::RecentService {
                service_year,
                eligible_from,
            } => {
                write!(
                    f,
                    "served in {service_year}, eligible again from {eligible_from}"
                )
            }
        }
    }
}

/// Evaluates all eligibility rules for a juror against a reference year.
///
/// Returns `None` when the juror is eligible, or the first failing rule.
/// Rules are checked in a fixed order (status, age, rest) so diagnostics
/// are deterministic; the rules themselves are independent.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if a stored date on the record is
/// malformed. Missing optional dates are not errors; they default to
/// eligible by policy.
pub fn evaluate_eligibility(
    juror: &Juror,
    reference_year: u16,
) -> Result<Option<IneligibilityCause>, DomainError> {
    let year = i32::from(reference_year);

    if juror.status != JurorStatus::Active {
        return Ok(Some(IneligibilityCause::Inactive));
    }

    if let Some(birth_date) = &juror.birth_date {
        let birth_year = calendar::year_of(birth_date)?;
        let latest_eligible_birth_year = year - MIN_JURY_AGE;
        if birth_year > latest_eligible_birth_year {
            return Ok(Some(IneligibilityCause::UnderAge {
                birth_year,
                latest_eligible_birth_year,
            }));
        }
    }

    if let Some(last_service) = &juror.last_service_date {
        let service_year = calendar::year_of(last_service)?;
        // Served in Y-1 or later means no full rest year before Y.
        if service_year >= year - 1 {
            return Ok(Some(IneligibilityCause::RecentService {
                service_year,
                eligible_from: service_year + 2,
            }));
        }
    }

    Ok(None)
}

/// Answers "is this juror eligible to be drawn for this reference year?".
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if a stored date on the record is
/// malformed.
pub fn is_eligible(juror: &Juror, reference_year: u16) -> Result<bool, DomainError> {
    Ok(evaluate_eligibility(juror, reference_year)?.is_none())
}
