// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draw, assignment, and service record mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::{draw_assignments, draws, service_records};
use crate::error::PersistenceError;
use crate::sqlite;
use jurado_domain::{AssignmentRole, Draw, DrawStatus};

/// Inserts a draw and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_draw(conn: &mut SqliteConnection, draw: &Draw) -> Result<i64, PersistenceError> {
    diesel::insert_into(draws::table)
        .values((
            draws::reference_year.eq(i32::from(draw.reference_year)),
            draws::draw_date.eq(&draw.draw_date),
            draws::sitting_date.eq(&draw.sitting_date),
            draws::sitting_time.eq(draw.sitting_time.as_deref()),
            draws::judge_id.eq(draw.judge_id),
            draws::status.eq(draw.status.as_str()),
        ))
        .execute(conn)?;

    let draw_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(
        draw_id,
        "Created draw for reference year {}", draw.reference_year
    );
    Ok(draw_id)
}

/// Updates a persisted draw in place.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `draw_id` matches no row.
pub fn update_draw(
    conn: &mut SqliteConnection,
    draw_id: i64,
    draw: &Draw,
) -> Result<(), PersistenceError> {
    debug!("Updating draw ID: {}", draw_id);

    let updated = diesel::update(draws::table)
        .filter(draws::draw_id.eq(draw_id))
        .set((
            draws::reference_year.eq(i32::from(draw.reference_year)),
            draws::draw_date.eq(&draw.draw_date),
            draws::sitting_date.eq(&draw.sitting_date),
            draws::sitting_time.eq(draw.sitting_time.as_deref()),
            draws::judge_id.eq(draw.judge_id),
            draws::status.eq(draw.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Draw {draw_id}")));
    }
    Ok(())
}

/// Sets a draw's lifecycle status.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `draw_id` matches no row.
pub fn set_draw_status(
    conn: &mut SqliteConnection,
    draw_id: i64,
    status: DrawStatus,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(draws::table)
        .filter(draws::draw_id.eq(draw_id))
        .set(draws::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Draw {draw_id}")));
    }
    info!("Draw {} status set to {}", draw_id, status);
    Ok(())
}

/// Deletes a draw; assignments, ballots, and service records cascade.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `draw_id` matches no row.
pub fn delete_draw(conn: &mut SqliteConnection, draw_id: i64) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(draws::table)
        .filter(draws::draw_id.eq(draw_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Draw {draw_id}")));
    }
    info!("Deleted draw ID: {}", draw_id);
    Ok(())
}

/// Inserts a (draw, juror) assignment and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a uniqueness
/// violation when the pair already exists).
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    draw_id: i64,
    juror_id: i64,
    role: AssignmentRole,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(draw_assignments::table)
        .values((
            draw_assignments::draw_id.eq(draw_id),
            draw_assignments::juror_id.eq(juror_id),
            draw_assignments::role.eq(role.as_str()),
        ))
        .execute(conn)?;

    let assignment_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    debug!(
        assignment_id,
        "Assigned juror {} to draw {} as {}", juror_id, draw_id, role
    );
    Ok(assignment_id)
}

/// Sets the role of an existing assignment.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the (draw, juror) pair does
/// not exist.
pub fn set_assignment_role(
    conn: &mut SqliteConnection,
    draw_id: i64,
    juror_id: i64,
    role: AssignmentRole,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(draw_assignments::table)
        .filter(draw_assignments::draw_id.eq(draw_id))
        .filter(draw_assignments::juror_id.eq(juror_id))
        .set(draw_assignments::role.eq(role.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Assignment for juror {juror_id} in draw {draw_id}"
        )));
    }
    Ok(())
}

/// Deletes a (draw, juror) assignment.
///
/// Ballots are untouched; the caller regenerates them explicitly.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the pair does not exist.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    draw_id: i64,
    juror_id: i64,
) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(draw_assignments::table)
        .filter(draw_assignments::draw_id.eq(draw_id))
        .filter(draw_assignments::juror_id.eq(juror_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Assignment for juror {juror_id} in draw {draw_id}"
        )));
    }
    debug!("Removed juror {} from draw {}", juror_id, draw_id);
    Ok(())
}

/// Deletes all last-service marks tied to a draw.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_service_records_for_draw(
    conn: &mut SqliteConnection,
    draw_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(diesel::delete(service_records::table)
        .filter(service_records::draw_id.eq(draw_id))
        .execute(conn)?)
}

/// Records last-service marks for a draw as a single batch insert.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_service_records(
    conn: &mut SqliteConnection,
    draw_id: i64,
    juror_ids: &[i64],
    service_date: &str,
) -> Result<(), PersistenceError> {
    let rows: Vec<_> = juror_ids
        .iter()
        .map(|juror_id| {
            (
                service_records::draw_id.eq(draw_id),
                service_records::juror_id.eq(*juror_id),
                service_records::service_date.eq(service_date),
            )
        })
        .collect();

    diesel::insert_into(service_records::table)
        .values(rows)
        .execute(conn)?;
    Ok(())
}
