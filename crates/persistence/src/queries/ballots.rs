// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ballot and service record queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{BallotRow, ServiceRecordData, ServiceRecordRow};
use crate::diesel_schema::{ballots, service_records};
use crate::error::PersistenceError;
use jurado_domain::Ballot;

/// Lists a draw's ballots in sequence order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_ballots(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<Vec<Ballot>, PersistenceError> {
    let rows: Vec<BallotRow> = ballots::table
        .filter(ballots::draw_id.eq(draw_id))
        .order(ballots::sequence_number.asc())
        .select(BallotRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Ballot::try_from).collect()
}

/// Retrieves a ballot by ID.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no ballot has the given ID.
pub fn get_ballot(conn: &mut SqliteConnection, ballot_id: i64) -> Result<Ballot, PersistenceError> {
    let row: BallotRow = ballots::table
        .filter(ballots::ballot_id.eq(ballot_id))
        .select(BallotRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Ballot {ballot_id}"))
            }
            other => PersistenceError::from(other),
        })?;
    Ballot::try_from(row)
}

/// Lists the last-service marks recorded for a draw.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_service_records(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<Vec<ServiceRecordData>, PersistenceError> {
    let rows: Vec<ServiceRecordRow> = service_records::table
        .filter(service_records::draw_id.eq(draw_id))
        .order(service_records::service_record_id.asc())
        .select(ServiceRecordRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(ServiceRecordData::from).collect())
}
