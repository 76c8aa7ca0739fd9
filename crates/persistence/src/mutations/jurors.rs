// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Juror and institution mutations.
//!
//! Callers are expected to have validated and normalized the juror before
//! any insert or update lands here; these functions translate a domain
//! `Juror` into column writes and nothing more.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::{institutions, jurors};
use crate::error::PersistenceError;
use crate::sqlite;
use jurado_domain::{InactivityReason, Juror, JurorStatus};

fn reason_column(juror: &Juror) -> Option<&'static str> {
    juror.reason.as_ref().map(InactivityReason::as_str)
}

/// Inserts a juror and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a CPF uniqueness
/// violation surfacing as a database error).
pub fn insert_juror(conn: &mut SqliteConnection, juror: &Juror) -> Result<i64, PersistenceError> {
    diesel::insert_into(jurors::table)
        .values((
            jurors::cpf.eq(juror.cpf.value()),
            jurors::name.eq(&juror.name),
            jurors::birth_date.eq(juror.birth_date.as_deref()),
            jurors::status.eq(juror.status.as_str()),
            jurors::inactivity_reason.eq(reason_column(juror)),
            jurors::suspended_until.eq(juror.suspended_until.as_deref()),
            jurors::last_service_date.eq(juror.last_service_date.as_deref()),
            jurors::institution_id.eq(juror.institution_id),
        ))
        .execute(conn)?;

    let juror_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(juror_id, "Registered juror {}", juror.cpf);
    Ok(juror_id)
}

/// Updates a persisted juror in place.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `juror_id` matches no row.
pub fn update_juror(
    conn: &mut SqliteConnection,
    juror_id: i64,
    juror: &Juror,
) -> Result<(), PersistenceError> {
    debug!("Updating juror ID: {}", juror_id);

    let updated = diesel::update(jurors::table)
        .filter(jurors::juror_id.eq(juror_id))
        .set((
            jurors::cpf.eq(juror.cpf.value()),
            jurors::name.eq(&juror.name),
            jurors::birth_date.eq(juror.birth_date.as_deref()),
            jurors::status.eq(juror.status.as_str()),
            jurors::inactivity_reason.eq(reason_column(juror)),
            jurors::suspended_until.eq(juror.suspended_until.as_deref()),
            jurors::last_service_date.eq(juror.last_service_date.as_deref()),
            jurors::institution_id.eq(juror.institution_id),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Juror {juror_id}")));
    }
    Ok(())
}

/// Deletes a juror row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `juror_id` matches no row.
pub fn delete_juror(conn: &mut SqliteConnection, juror_id: i64) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(jurors::table)
        .filter(jurors::juror_id.eq(juror_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Juror {juror_id}")));
    }
    info!("Deleted juror ID: {}", juror_id);
    Ok(())
}

/// Reactivates the given jurors as one bulk update.
///
/// Sets status to Active and clears the inactivity reason and suspension
/// end date. Returns the number of rows updated.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn reactivate_jurors(
    conn: &mut SqliteConnection,
    juror_ids: &[i64],
) -> Result<usize, PersistenceError> {
    if juror_ids.is_empty() {
        return Ok(0);
    }

    let updated = diesel::update(jurors::table)
        .filter(jurors::juror_id.eq_any(juror_ids))
        .set((
            jurors::status.eq(JurorStatus::Active.as_str()),
            jurors::inactivity_reason.eq(None::<String>),
            jurors::suspended_until.eq(None::<String>),
        ))
        .execute(conn)?;
    Ok(updated)
}

/// Creates an institution and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_institution(
    conn: &mut SqliteConnection,
    name: &str,
    city: Option<&str>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(institutions::table)
        .values((institutions::name.eq(name), institutions::city.eq(city)))
        .execute(conn)?;

    let institution_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(institution_id, "Created institution: {}", name);
    Ok(institution_id)
}

/// Deletes an institution; juror references are nulled by the schema.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `institution_id` matches no row.
pub fn delete_institution(
    conn: &mut SqliteConnection,
    institution_id: i64,
) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(institutions::table)
        .filter(institutions::institution_id.eq(institution_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Institution {institution_id}"
        )));
    }
    info!("Deleted institution ID: {}", institution_id);
    Ok(())
}
