// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draw and assignment queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{AssignmentRow, DrawRow};
use crate::diesel_schema::{draw_assignments, draws, jurors};
use crate::error::PersistenceError;
use jurado::BallotCandidate;
use jurado_domain::{AssignmentRole, Draw, DrawAssignment};

/// Retrieves a draw by ID.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no draw has the given ID.
pub fn get_draw(conn: &mut SqliteConnection, draw_id: i64) -> Result<Draw, PersistenceError> {
    let row: DrawRow = draws::table
        .filter(draws::draw_id.eq(draw_id))
        .select(DrawRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Draw {draw_id}"))
            }
            other => PersistenceError::from(other),
        })?;
    Draw::try_from(row)
}

/// Lists all draws, most recent draw date first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_draws(conn: &mut SqliteConnection) -> Result<Vec<Draw>, PersistenceError> {
    let rows: Vec<DrawRow> = draws::table
        .order((draws::draw_date.desc(), draws::draw_id.desc()))
        .select(DrawRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Draw::try_from).collect()
}

/// Lists all draws for a reference year, most recent draw date first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_draws_for_year(
    conn: &mut SqliteConnection,
    reference_year: u16,
) -> Result<Vec<Draw>, PersistenceError> {
    let rows: Vec<DrawRow> = draws::table
        .filter(draws::reference_year.eq(i32::from(reference_year)))
        .order((draws::draw_date.desc(), draws::draw_id.desc()))
        .select(DrawRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Draw::try_from).collect()
}

/// Lists a draw's assignments.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<Vec<DrawAssignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = draw_assignments::table
        .filter(draw_assignments::draw_id.eq(draw_id))
        .order(draw_assignments::assignment_id.asc())
        .select(AssignmentRow::as_select())
        .load(conn)?;
    rows.into_iter().map(DrawAssignment::try_from).collect()
}

/// Retrieves the assignment for a (draw, juror) pair, if one exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_assignment(
    conn: &mut SqliteConnection,
    draw_id: i64,
    juror_id: i64,
) -> Result<Option<DrawAssignment>, PersistenceError> {
    let result: Result<AssignmentRow, diesel::result::Error> = draw_assignments::table
        .filter(draw_assignments::draw_id.eq(draw_id))
        .filter(draw_assignments::juror_id.eq(juror_id))
        .select(AssignmentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(DrawAssignment::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Reads a draw's assignments joined with juror names, as numbering input.
///
/// # Errors
///
/// Returns an error if the query fails or a stored role is malformed.
pub fn ballot_candidates(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<Vec<BallotCandidate>, PersistenceError> {
    let rows: Vec<(i64, String, String)> = draw_assignments::table
        .inner_join(jurors::table)
        .filter(draw_assignments::draw_id.eq(draw_id))
        .select((
            draw_assignments::juror_id,
            jurors::name,
            draw_assignments::role,
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(juror_id, juror_name, role)| {
            Ok(BallotCandidate {
                juror_id,
                juror_name,
                role: AssignmentRole::parse(&role)?,
            })
        })
        .collect()
}
