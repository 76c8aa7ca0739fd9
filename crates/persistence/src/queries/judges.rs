// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Judge queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::JudgeRow;
use crate::diesel_schema::judges;
use crate::error::PersistenceError;
use jurado_domain::Judge;

/// Retrieves a judge by ID.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no judge has the given ID.
pub fn get_judge(conn: &mut SqliteConnection, judge_id: i64) -> Result<Judge, PersistenceError> {
    let row: JudgeRow = judges::table
        .filter(judges::judge_id.eq(judge_id))
        .select(JudgeRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Judge {judge_id}"))
            }
            other => PersistenceError::from(other),
        })?;
    Judge::try_from(row)
}

/// Lists all judges, ordered by name.
///
/// The titular fix-up reads the full table through this query, so its
/// ordering does not affect invariant resolution (which sorts itself).
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_judges(conn: &mut SqliteConnection) -> Result<Vec<Judge>, PersistenceError> {
    let rows: Vec<JudgeRow> = judges::table
        .order((judges::name.asc(), judges::judge_id.asc()))
        .select(JudgeRow::as_select())
        .load(conn)?;
    rows.into_iter().map(Judge::try_from).collect()
}
