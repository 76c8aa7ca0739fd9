// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field and invariant validation for domain records.
//!
//! Validation runs before any write. The cross-field invariants on
//! [`Juror`] records (reason only when inactive, suspension end date only
//! with a temporary suspension) are enforced here; the write-time
//! normalization that *establishes* those invariants lives in the core
//! crate.

use crate::calendar;
use crate::error::DomainError;
use crate::types::{Draw, InactivityReason, Judge, Juror, JurorStatus};

/// The legal maximum size of a deliberation panel.
pub const MAX_PANEL_SIZE: usize = 7;

/// Maximum accepted length for person names.
const MAX_NAME_LENGTH: usize = 120;

/// Reference years outside this range are assumed to be data-entry errors.
const REFERENCE_YEAR_RANGE: std::ops::RangeInclusive<u16> = 1900..=2200;

/// Validates a juror record's fields and cross-field invariants.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or longer than 120 characters
/// - Any present date field is not a well-formed `YYYY-MM-DD` string
/// - An active juror carries a reason or suspension end date
/// - A suspension end date is present without a `TemporarySuspension` reason
/// - A `TemporarySuspension` reason is present without an end date
pub fn validate_juror_fields(juror: &Juror) -> Result<(), DomainError> {
    validate_name(&juror.name)?;

    if let Some(birth_date) = &juror.birth_date {
        calendar::validate_iso_date(birth_date)?;
    }
    if let Some(suspended_until) = &juror.suspended_until {
        calendar::validate_iso_date(suspended_until)?;
    }
    if let Some(last_service) = &juror.last_service_date {
        calendar::validate_iso_date(last_service)?;
    }

    match juror.status {
        JurorStatus::Active => {
            if juror.reason.is_some() || juror.suspended_until.is_some() {
                return Err(DomainError::ActiveJurorWithReason {
                    cpf: juror.cpf.value().to_string(),
                });
            }
        }
        JurorStatus::Inactive => {
            let is_suspension = juror.reason == Some(InactivityReason::TemporarySuspension);
            if juror.suspended_until.is_some() && !is_suspension {
                return Err(DomainError::SuspensionWithoutReason {
                    cpf: juror.cpf.value().to_string(),
                });
            }
            if is_suspension && juror.suspended_until.is_none() {
                return Err(DomainError::SuspensionWithoutEndDate {
                    cpf: juror.cpf.value().to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Validates a judge record's fields.
///
/// # Errors
///
/// Returns an error if the name is empty or longer than 120 characters.
pub fn validate_judge_fields(judge: &Judge) -> Result<(), DomainError> {
    validate_name(&judge.name)
}

/// Validates a draw record's fields.
///
/// # Errors
///
/// Returns an error if:
/// - The reference year is outside 1900–2200
/// - The draw date or sitting date is not a well-formed `YYYY-MM-DD` string
/// - The sitting time is present but not a valid `HH:MM` value
pub fn validate_draw_fields(draw: &Draw) -> Result<(), DomainError> {
    if !REFERENCE_YEAR_RANGE.contains(&draw.reference_year) {
        return Err(DomainError::InvalidReferenceYear {
            year: draw.reference_year,
        });
    }
    calendar::validate_iso_date(&draw.draw_date)?;
    calendar::validate_iso_date(&draw.sitting_date)?;
    if let Some(sitting_time) = &draw.sitting_time {
        calendar::validate_time(sitting_time)?;
    }
    Ok(())
}

/// Validates the size of a deliberation panel for last-service marking.
///
/// An empty panel is accepted: marking an empty panel clears the draw's
/// prior marks without recording new ones.
///
/// # Errors
///
/// Returns `DomainError::PanelTooLarge` if the panel exceeds
/// [`MAX_PANEL_SIZE`] jurors.
pub fn validate_panel_size(count: usize) -> Result<(), DomainError> {
    if count > MAX_PANEL_SIZE {
        return Err(DomainError::PanelTooLarge {
            count,
            max: MAX_PANEL_SIZE,
        });
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name exceeds {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
