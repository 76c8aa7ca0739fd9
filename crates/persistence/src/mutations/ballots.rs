// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ballot mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::ballots;
use crate::error::PersistenceError;
use jurado::BallotSlot;
use jurado_domain::BallotStatus;

/// Deletes all ballots for a draw. Regeneration is never additive.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_ballots_for_draw(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<usize, PersistenceError> {
    let deleted = diesel::delete(ballots::table)
        .filter(ballots::draw_id.eq(draw_id))
        .execute(conn)?;
    debug!("Deleted {} prior ballots for draw {}", deleted, draw_id);
    Ok(deleted)
}

/// Inserts a fresh ballot numbering for a draw as a single batch.
///
/// # Errors
///
/// Returns an error if the insert fails or a sequence number does not
/// fit the stored column type.
pub fn insert_ballots(
    conn: &mut SqliteConnection,
    draw_id: i64,
    slots: &[BallotSlot],
) -> Result<(), PersistenceError> {
    if slots.is_empty() {
        return Ok(());
    }

    let mut rows = Vec::with_capacity(slots.len());
    for slot in slots {
        let sequence_number = i32::try_from(slot.sequence).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "Sequence number {} is out of range",
                slot.sequence
            ))
        })?;
        rows.push((
            ballots::draw_id.eq(draw_id),
            ballots::juror_id.eq(slot.juror_id),
            ballots::sequence_number.eq(sequence_number),
            ballots::status.eq(BallotStatus::Generated.as_str()),
        ));
    }

    diesel::insert_into(ballots::table).values(rows).execute(conn)?;
    Ok(())
}

/// Sets a ballot's printable status.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `ballot_id` matches no row.
pub fn set_ballot_status(
    conn: &mut SqliteConnection,
    ballot_id: i64,
    status: BallotStatus,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(ballots::table)
        .filter(ballots::ballot_id.eq(ballot_id))
        .set(ballots::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Ballot {ballot_id}")));
    }
    Ok(())
}
