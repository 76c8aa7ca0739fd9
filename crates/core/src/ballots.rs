// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ballot numbering.
//!
//! A numbering pass turns a draw's current assignments into a gap-free
//! sequence starting at 1: titulars first, then suplentes, each group in
//! name order (juror id breaks exact name ties). Regeneration is never
//! additive; the persistence layer deletes the previous batch and inserts
//! the fresh numbering in one transaction.

use jurado_domain::AssignmentRole;
use serde::{Deserialize, Serialize};

/// One assignment as seen by the numbering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotCandidate {
    /// The assigned juror.
    pub juror_id: i64,
    /// The juror's name, used for deterministic ordering.
    pub juror_name: String,
    /// The juror's role in the draw.
    pub role: AssignmentRole,
}

/// One numbered slot produced by a numbering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotSlot {
    /// The juror this slot identifies.
    pub juror_id: i64,
    /// The 1-based, gap-free sequence number within the draw.
    pub sequence: u32,
}

/// Assigns sequence numbers to a draw's assignments.
///
/// The output is deterministic for a given set of candidates: sorted by
/// role (titulars first), then by juror name, then by juror id. An empty
/// candidate list yields an empty numbering; that is a valid outcome, not
/// an error.
#[must_use]
pub fn number_ballots(candidates: &[BallotCandidate]) -> Vec<BallotSlot> {
    let mut ordered: Vec<&BallotCandidate> = candidates.iter().collect();
    ordered.sort_by(|a, b| {
        role_rank(a.role)
            .cmp(&role_rank(b.role))
            .then_with(|| a.juror_name.cmp(&b.juror_name))
            .then_with(|| a.juror_id.cmp(&b.juror_id))
    });

    ordered
        .iter()
        .enumerate()
        .map(|(index, candidate)| BallotSlot {
            juror_id: candidate.juror_id,
            sequence: u32::try_from(index + 1).unwrap_or(u32::MAX),
        })
        .collect()
}

const fn role_rank(role: AssignmentRole) -> u8 {
    match role {
        AssignmentRole::Titular => 0,
        AssignmentRole::Suplente => 1,
    }
}
