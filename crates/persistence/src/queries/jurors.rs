// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Juror and institution queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{InstitutionData, JurorRow};
use crate::diesel_schema::{draw_assignments, institutions, jurors, service_records};
use crate::error::PersistenceError;
use jurado::is_due_for_reactivation;
use jurado_domain::{Cpf, InactivityReason, Juror, JurorStatus, is_eligible};

/// Retrieves a juror by ID.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no juror has the given ID.
pub fn get_juror(conn: &mut SqliteConnection, juror_id: i64) -> Result<Juror, PersistenceError> {
    let row: JurorRow = jurors::table
        .filter(jurors::juror_id.eq(juror_id))
        .select(JurorRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Juror {juror_id}"))
            }
            other => PersistenceError::from(other),
        })?;
    Juror::try_from(row)
}

/// Retrieves a juror by CPF, if one exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_juror_by_cpf(
    conn: &mut SqliteConnection,
    cpf: &Cpf,
) -> Result<Option<Juror>, PersistenceError> {
    let result: Result<JurorRow, diesel::result::Error> = jurors::table
        .filter(jurors::cpf.eq(cpf.value()))
        .select(JurorRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Juror::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all jurors, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_jurors(conn: &mut SqliteConnection) -> Result<Vec<Juror>, PersistenceError> {
    let rows: Vec<JurorRow> = jurors::table
        .order((jurors::name.asc(), jurors::juror_id.asc()))
        .select(JurorRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Juror::try_from).collect()
}

/// Builds the eligible pool for a draw's reference year.
///
/// The database narrows to active jurors in name order; the age and rest
/// rules are evaluated in memory so year extraction stays string-sliced
/// rather than delegated to `SQLite` date functions.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is malformed.
pub fn eligible_pool(
    conn: &mut SqliteConnection,
    reference_year: u16,
) -> Result<Vec<Juror>, PersistenceError> {
    debug!("Computing eligible pool for reference year {reference_year}");

    let rows: Vec<JurorRow> = jurors::table
        .filter(jurors::status.eq(JurorStatus::Active.as_str()))
        .order((jurors::name.asc(), jurors::juror_id.asc()))
        .select(JurorRow::as_select())
        .load(conn)?;

    let mut pool: Vec<Juror> = Vec::new();
    for row in rows {
        let juror = Juror::try_from(row)?;
        if is_eligible(&juror, reference_year).map_err(PersistenceError::Domain)? {
            pool.push(juror);
        }
    }
    Ok(pool)
}

/// Selects jurors whose temporary suspension has expired as of `today_iso`.
///
/// The database narrows to temporarily suspended jurors; the expiry
/// comparison itself runs the core rule, which is inclusive of the end
/// date.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn reactivation_candidates(
    conn: &mut SqliteConnection,
    today_iso: &str,
) -> Result<Vec<i64>, PersistenceError> {
    let rows: Vec<JurorRow> = jurors::table
        .filter(jurors::status.eq(JurorStatus::Inactive.as_str()))
        .filter(jurors::inactivity_reason.eq(InactivityReason::TemporarySuspension.as_str()))
        .select(JurorRow::as_select())
        .load(conn)?;

    let mut ids: Vec<i64> = Vec::new();
    for row in rows {
        let juror = Juror::try_from(row)?;
        if is_due_for_reactivation(&juror, today_iso)
            && let Some(juror_id) = juror.juror_id
        {
            ids.push(juror_id);
        }
    }
    Ok(ids)
}

/// Checks whether a juror is referenced by any assignment or service record.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_juror_referenced(
    conn: &mut SqliteConnection,
    juror_id: i64,
) -> Result<bool, PersistenceError> {
    let assignment_count: i64 = draw_assignments::table
        .filter(draw_assignments::juror_id.eq(juror_id))
        .count()
        .get_result(conn)?;
    if assignment_count > 0 {
        return Ok(true);
    }

    let service_count: i64 = service_records::table
        .filter(service_records::juror_id.eq(juror_id))
        .count()
        .get_result(conn)?;
    Ok(service_count > 0)
}

/// Lists all institutions, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_institutions(
    conn: &mut SqliteConnection,
) -> Result<Vec<InstitutionData>, PersistenceError> {
    let rows: Vec<(i64, String, Option<String>)> = institutions::table
        .order(institutions::name.asc())
        .select((
            institutions::institution_id,
            institutions::name,
            institutions::city,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(institution_id, name, city)| InstitutionData {
            institution_id,
            name,
            city,
        })
        .collect())
}
