// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The "exactly one titular judge" invariant.
//!
//! Across all judge records, exactly one active judge carries the titular
//! flag whenever at least one judge exists. The resolution here is an
//! explicit fix-up invoked synchronously after every judge create, update,
//! or delete, inside the same transaction as the mutation; it is a safety
//! net for indirect paths (deletions, bulk edits), not a substitute for
//! rejecting a direct demotion of the sole titular (see
//! [`ensure_can_demote`]).
//!
//! Tie-breaks are lexicographic on name, then ascending id, so repeated
//! runs converge on the same judge.

use crate::error::CoreError;
use jurado_domain::{DomainError, Judge, JudgeStatus};
use serde::{Deserialize, Serialize};

/// The flag changes required to restore the titular invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitularResolution {
    /// Judge to receive the titular flag, if any.
    pub promote: Option<i64>,
    /// Judges to have the titular flag removed.
    pub demote: Vec<i64>,
}

impl TitularResolution {
    /// Returns whether the invariant already holds and nothing changes.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.promote.is_none() && self.demote.is_empty()
    }
}

/// Computes the fix-up that restores the titular invariant.
///
/// Algorithm, in order:
///
/// 1. No judges: nothing to do.
/// 2. Exactly one judge that is not titular: promote it.
/// 3. No active titular: promote the active judge with the smallest name,
///    or the smallest-named judge overall if none is active. Any stale
///    titular flags are removed in the same pass.
/// 4. More than one active titular: keep the smallest-named one, demote
///    every other flagged judge.
///
/// Judges without a persisted id are ignored; the input is expected to be
/// the full judges table.
#[must_use]
pub fn resolve_titular(judges: &[Judge]) -> TitularResolution {
    let persisted: Vec<&Judge> = judges.iter().filter(|j| j.judge_id.is_some()).collect();

    if persisted.is_empty() {
        return TitularResolution::default();
    }

    if let [only] = persisted.as_slice() {
        return TitularResolution {
            promote: if only.is_titular { None } else { only.judge_id },
            demote: Vec::new(),
        };
    }

    let active_titulars: Vec<&Judge> = persisted
        .iter()
        .copied()
        .filter(|j| j.is_active_titular())
        .collect();

    let keeper: Option<i64> = match active_titulars.len() {
        0 => persisted
            .iter()
            .copied()
            .filter(|j| j.status == JudgeStatus::Active)
            .min_by(|a, b| order_key(a).cmp(&order_key(b)))
            .or_else(|| {
                persisted
                    .iter()
                    .copied()
                    .min_by(|a, b| order_key(a).cmp(&order_key(b)))
            })
            .and_then(|j| j.judge_id),
        1 => active_titulars[0].judge_id,
        _ => active_titulars
            .iter()
            .copied()
            .min_by(|a, b| order_key(a).cmp(&order_key(b)))
            .and_then(|j| j.judge_id),
    };

    let Some(keeper_id) = keeper else {
        return TitularResolution::default();
    };

    let demote: Vec<i64> = persisted
        .iter()
        .filter(|j| j.is_titular && j.judge_id != Some(keeper_id))
        .filter_map(|j| j.judge_id)
        .collect();

    let keeper_already_titular = persisted
        .iter()
        .any(|j| j.judge_id == Some(keeper_id) && j.is_titular);

    TitularResolution {
        promote: (!keeper_already_titular).then_some(keeper_id),
        demote,
    }
}

/// Verifies that the titular invariant holds.
///
/// With at least one judge present, exactly one judge must carry the
/// titular flag; if any active judge exists, the flagged judge must be
/// active. Run after applying a [`TitularResolution`]; a failure here is a
/// logic bug, and the enclosing transaction must be aborted.
///
/// # Errors
///
/// Returns `CoreError::InvariantViolation` describing the violation.
pub fn verify_titular(judges: &[Judge]) -> Result<(), CoreError> {
    if judges.is_empty() {
        return Ok(());
    }

    let flagged = judges.iter().filter(|j| j.is_titular).count();
    if flagged != 1 {
        return Err(CoreError::InvariantViolation(format!(
            "expected exactly 1 titular judge, found {flagged}"
        )));
    }

    let has_active = judges.iter().any(|j| j.status == JudgeStatus::Active);
    let active_titulars = judges.iter().filter(|j| j.is_active_titular()).count();
    if has_active && active_titulars != 1 {
        return Err(CoreError::InvariantViolation(format!(
            "expected exactly 1 active titular judge, found {active_titulars}"
        )));
    }

    Ok(())
}

/// Rejects a direct edit that would unset the sole titular judge.
///
/// Called before an update writes `is_titular = false`. Indirect paths
/// (deletion, status changes) are instead repaired by [`resolve_titular`].
///
/// # Errors
///
/// Returns `DomainError::SoleTitularDemotion` if `judge_id` is currently
/// the only active titular and the update clears its flag.
pub fn ensure_can_demote(
    judges: &[Judge],
    judge_id: i64,
    wants_titular: bool,
) -> Result<(), DomainError> {
    if wants_titular {
        return Ok(());
    }

    let target_is_active_titular = judges
        .iter()
        .any(|j| j.judge_id == Some(judge_id) && j.is_active_titular());
    let other_active_titulars = judges
        .iter()
        .filter(|j| j.is_active_titular() && j.judge_id != Some(judge_id))
        .count();

    if target_is_active_titular && other_active_titulars == 0 {
        let judge_name = judges
            .iter()
            .find(|j| j.judge_id == Some(judge_id))
            .map_or_else(String::new, |j| j.name.clone());
        return Err(DomainError::SoleTitularDemotion { judge_name });
    }

    Ok(())
}

/// Ordering key for deterministic tie-breaks: name, then id.
fn order_key(judge: &Judge) -> (&str, i64) {
    (judge.name.as_str(), judge.judge_id.unwrap_or(i64::MAX))
}
