// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-driven juror status transitions.
//!
//! Two rules operate here:
//!
//! - **Write-time normalization** runs on every juror create or update,
//!   inside the same transaction as the triggering write. Setting a juror
//!   `Active` clears any inactivity reason and suspension end date; a
//!   last-service date in the year before the current year forces the
//!   juror into `TwelveMonthRest`, unless a permanent exclusion reason is
//!   already recorded.
//! - **Reactivation** expires temporary suspensions. The predicate here is
//!   pure; the persistence layer selects due jurors and bulk-updates them
//!   against a single "today" snapshot so a juror cannot age out of scope
//!   mid-sweep.
//!
//! The rest rule compares against the *system clock's* current year, not a
//! draw's reference year. The original system behaves this way and product
//! requirements have not resolved the ambiguity; the comparison year is a
//! parameter, so changing the policy is a call-site decision.

use jurado_domain::{DomainError, InactivityReason, Juror, JurorStatus, calendar};
use serde::{Deserialize, Serialize};

/// Summary of what write-time normalization changed on a juror record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Normalization {
    /// An inactivity reason or suspension end date was cleared because the
    /// record was set `Active`.
    pub cleared_inactivity: bool,
    /// The record was forced into `TwelveMonthRest` because of last year's
    /// service.
    pub forced_rest: bool,
}

impl Normalization {
    /// Returns whether normalization changed anything.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.cleared_inactivity || self.forced_rest
    }
}

/// Normalizes a juror record in place before it is written.
///
/// Order matters: the active-status cleanup runs first, then the rest rule,
/// so a caller that sets a juror `Active` while a fresh service record
/// stands still ends up rested. A permanent exclusion reason is never
/// overwritten by the rest rule.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the last-service date is
/// malformed.
pub fn normalize_for_write(
    juror: &mut Juror,
    current_year: i32,
) -> Result<Normalization, DomainError> {
    let mut normalization = Normalization::default();

    if juror.status == JurorStatus::Active
        && (juror.reason.is_some() || juror.suspended_until.is_some())
    {
        juror.reason = None;
        juror.suspended_until = None;
        normalization.cleared_inactivity = true;
    }

    if let Some(last_service) = &juror.last_service_date {
        let service_year = calendar::year_of(last_service)?;
        let has_permanent_reason = juror.reason.is_some_and(|reason| reason.is_permanent());
        if service_year == current_year - 1 && !has_permanent_reason {
            juror.status = JurorStatus::Inactive;
            juror.reason = Some(InactivityReason::TwelveMonthRest);
            juror.suspended_until = None;
            normalization.forced_rest = true;
        }
    }

    Ok(normalization)
}

/// Returns whether a juror's temporary suspension has expired as of
/// `today_iso`.
///
/// The comparison is inclusive: a suspension ending today is already over.
/// ISO date strings compare lexicographically in calendar order.
#[must_use]
pub fn is_due_for_reactivation(juror: &Juror, today_iso: &str) -> bool {
    juror.status == JurorStatus::Inactive
        && juror.reason == Some(InactivityReason::TemporarySuspension)
        && juror
            .suspended_until
            .as_deref()
            .is_some_and(|until| until <= today_iso)
}

/// Reactivates a juror in place: `Active`, no reason, no suspension date.
pub fn reactivate(juror: &mut Juror) {
    juror.status = JurorStatus::Active;
    juror.reason = None;
    juror.suspended_until = None;
}
