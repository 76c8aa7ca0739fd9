// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Judge mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::judges;
use crate::error::PersistenceError;
use crate::sqlite;
use jurado::TitularResolution;
use jurado_domain::Judge;

/// Inserts a judge and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_judge(conn: &mut SqliteConnection, judge: &Judge) -> Result<i64, PersistenceError> {
    diesel::insert_into(judges::table)
        .values((
            judges::name.eq(&judge.name),
            judges::is_titular.eq(i32::from(judge.is_titular)),
            judges::status.eq(judge.status.as_str()),
        ))
        .execute(conn)?;

    let judge_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(judge_id, "Created judge: {}", judge.name);
    Ok(judge_id)
}

/// Updates a persisted judge in place.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `judge_id` matches no row.
pub fn update_judge(
    conn: &mut SqliteConnection,
    judge_id: i64,
    judge: &Judge,
) -> Result<(), PersistenceError> {
    debug!("Updating judge ID: {}", judge_id);

    let updated = diesel::update(judges::table)
        .filter(judges::judge_id.eq(judge_id))
        .set((
            judges::name.eq(&judge.name),
            judges::is_titular.eq(i32::from(judge.is_titular)),
            judges::status.eq(judge.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Judge {judge_id}")));
    }
    Ok(())
}

/// Deletes a judge row; draws referencing it are nulled by the schema.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if `judge_id` matches no row.
pub fn delete_judge(conn: &mut SqliteConnection, judge_id: i64) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(judges::table)
        .filter(judges::judge_id.eq(judge_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Judge {judge_id}")));
    }
    info!("Deleted judge ID: {}", judge_id);
    Ok(())
}

/// Applies a titular fix-up: one optional promotion, any demotions.
///
/// # Errors
///
/// Returns an error if a flag update fails.
pub fn apply_titular_resolution(
    conn: &mut SqliteConnection,
    resolution: &TitularResolution,
) -> Result<(), PersistenceError> {
    if resolution.is_noop() {
        return Ok(());
    }

    if !resolution.demote.is_empty() {
        debug!("Demoting stale titular judges: {:?}", resolution.demote);
        diesel::update(judges::table)
            .filter(judges::judge_id.eq_any(&resolution.demote))
            .set(judges::is_titular.eq(0))
            .execute(conn)?;
    }

    if let Some(judge_id) = resolution.promote {
        info!("Promoting judge {} to titular", judge_id);
        diesel::update(judges::table)
            .filter(judges::judge_id.eq(judge_id))
            .set(judges::is_titular.eq(1))
            .execute(conn)?;
    }

    Ok(())
}
