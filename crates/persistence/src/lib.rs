// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the jury administration engine.
//!
//! This crate provides database persistence for jurors, judges, draws,
//! assignments, ballots, and service records. It is built on Diesel over
//! `SQLite` with embedded migrations.
//!
//! The [`Persistence`] adapter is the single entry point. Every operation
//! that reads-then-writes shared state (the titular fix-up, the
//! reactivation sweep, ballot regeneration, last-service marking) runs
//! inside one Diesel transaction, so a concurrent reader never observes
//! an intermediate invalid state such as zero titular judges or a gapped
//! ballot numbering.
//!
//! The rule hooks live in the `jurado` core crate and are invoked here at
//! the write path: juror writes are normalized before they land, judge
//! mutations are followed by the titular fix-up and a verification pass,
//! and ballot generation delegates its ordering to the numbering pass.
//!
//! ## Testing
//!
//! Tests run against unique in-memory `SQLite` databases, named via an
//! atomic counter for deterministic isolation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

use jurado::{
    DrawSelection, ensure_can_demote, normalize_for_write, number_ballots, resolve_titular,
    verify_titular,
};
use jurado_domain::{
    AssignmentRole, Ballot, BallotStatus, Cpf, Draw, DrawAssignment, DrawStatus, Judge, Juror,
    validate_draw_fields, validate_judge_fields, validate_juror_fields, validate_panel_size,
};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{InstitutionData, ServiceRecordData};
pub use error::PersistenceError;

/// Persistence adapter for the jury administration record store.
///
/// Owns a single `SQLite` connection; the engine is synchronous and
/// single-writer by design, so no pooling is involved.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Jurors
    // ========================================================================

    /// Registers a juror and returns the assigned ID.
    ///
    /// The record is normalized for write (Active clears any suspension;
    /// a last-year service date forces the twelve-month rest) and
    /// validated before the insert, all in one transaction.
    ///
    /// # Arguments
    ///
    /// * `juror` - The juror to register (without a persisted id)
    /// * `current_year` - The system clock's current year
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields, a duplicate CPF, or a store
    /// failure.
    pub fn register_juror(
        &mut self,
        juror: &Juror,
        current_year: i32,
    ) -> Result<i64, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let mut record = juror.clone();
                normalize_for_write(&mut record, current_year)?;
                validate_juror_fields(&record)?;

                if queries::jurors::find_juror_by_cpf(conn, &record.cpf)?.is_some() {
                    return Err(PersistenceError::DuplicateCpf(record.cpf.to_string()));
                }

                mutations::jurors::insert_juror(conn, &record)
            })
    }

    /// Registers a batch of jurors in a single transaction.
    ///
    /// Either every juror is registered or none are; the roster import
    /// uses this for its all-or-nothing semantics.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial writes remain.
    pub fn register_jurors(
        &mut self,
        jurors: &[Juror],
        current_year: i32,
    ) -> Result<Vec<i64>, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let mut ids = Vec::with_capacity(jurors.len());
                for juror in jurors {
                    let mut record = juror.clone();
                    normalize_for_write(&mut record, current_year)?;
                    validate_juror_fields(&record)?;

                    if queries::jurors::find_juror_by_cpf(conn, &record.cpf)?.is_some() {
                        return Err(PersistenceError::DuplicateCpf(record.cpf.to_string()));
                    }

                    ids.push(mutations::jurors::insert_juror(conn, &record)?);
                }
                info!("Registered {} jurors", ids.len());
                Ok(ids)
            })
    }

    /// Updates a persisted juror, applying write-time normalization.
    ///
    /// # Arguments
    ///
    /// * `juror` - The juror to update (must carry a persisted id)
    /// * `current_year` - The system clock's current year
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields, a missing id, a CPF collision
    /// with another juror, or a store failure.
    pub fn update_juror(
        &mut self,
        juror: &Juror,
        current_year: i32,
    ) -> Result<(), PersistenceError> {
        let juror_id = juror.juror_id.ok_or_else(|| {
            PersistenceError::NotFound("Juror without a persisted id".to_string())
        })?;

        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let mut record = juror.clone();
                normalize_for_write(&mut record, current_year)?;
                validate_juror_fields(&record)?;

                if let Some(existing) = queries::jurors::find_juror_by_cpf(conn, &record.cpf)?
                    && existing.juror_id != Some(juror_id)
                {
                    return Err(PersistenceError::DuplicateCpf(record.cpf.to_string()));
                }

                mutations::jurors::update_juror(conn, juror_id, &record)
            })
    }

    /// Retrieves a juror by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no juror has the given ID.
    pub fn get_juror(&mut self, juror_id: i64) -> Result<Juror, PersistenceError> {
        queries::jurors::get_juror(&mut self.conn, juror_id)
    }

    /// Retrieves a juror by CPF, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_juror_by_cpf(&mut self, cpf: &Cpf) -> Result<Option<Juror>, PersistenceError> {
        queries::jurors::find_juror_by_cpf(&mut self.conn, cpf)
    }

    /// Lists all jurors, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_jurors(&mut self) -> Result<Vec<Juror>, PersistenceError> {
        queries::jurors::list_jurors(&mut self.conn)
    }

    /// Deletes a juror not referenced by any draw.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::JurorReferenced` if the juror appears
    /// in any assignment or service record.
    pub fn delete_juror(&mut self, juror_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                if queries::jurors::is_juror_referenced(conn, juror_id)? {
                    return Err(PersistenceError::JurorReferenced { juror_id });
                }
                mutations::jurors::delete_juror(conn, juror_id)
            })
    }

    /// Reactivates all jurors whose temporary suspension has expired.
    ///
    /// Candidate selection and the bulk update share one `today` snapshot
    /// and one transaction, so a juror cannot age out of scope mid-sweep.
    /// Idempotent: a second run with no time passing reactivates 0.
    ///
    /// # Arguments
    ///
    /// * `today_iso` - Today's date as `YYYY-MM-DD`
    ///
    /// # Returns
    ///
    /// The number of jurors reactivated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or updated.
    pub fn reactivation_sweep(&mut self, today_iso: &str) -> Result<usize, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let ids = queries::jurors::reactivation_candidates(conn, today_iso)?;
                let count = mutations::jurors::reactivate_jurors(conn, &ids)?;
                if count > 0 {
                    info!("Reactivation sweep reactivated {} jurors", count);
                }
                Ok(count)
            })
    }

    // ========================================================================
    // Institutions
    // ========================================================================

    /// Creates an institution and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_institution(
        &mut self,
        name: &str,
        city: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::jurors::create_institution(&mut self.conn, name, city)
    }

    /// Deletes an institution; jurors referencing it keep their records
    /// with the reference nulled.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the institution does not exist.
    pub fn delete_institution(&mut self, institution_id: i64) -> Result<(), PersistenceError> {
        mutations::jurors::delete_institution(&mut self.conn, institution_id)
    }

    /// Lists all institutions, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_institutions(&mut self) -> Result<Vec<InstitutionData>, PersistenceError> {
        queries::jurors::list_institutions(&mut self.conn)
    }

    // ========================================================================
    // Judges
    // ========================================================================

    /// Creates a judge and restores the titular invariant.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields, a store failure, or an
    /// invariant violation surviving the fix-up.
    pub fn create_judge(&mut self, judge: &Judge) -> Result<i64, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                validate_judge_fields(judge)?;
                let judge_id = mutations::judges::insert_judge(conn, judge)?;
                restore_titular_invariant(conn)?;
                Ok(judge_id)
            })
    }

    /// Updates a judge and restores the titular invariant.
    ///
    /// A direct edit that would unset the sole active titular is rejected
    /// with a validation error rather than silently fixed up.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields, a sole-titular demotion, a
    /// missing judge, a store failure, or a surviving invariant violation.
    pub fn update_judge(&mut self, judge: &Judge) -> Result<(), PersistenceError> {
        let judge_id = judge.judge_id.ok_or_else(|| {
            PersistenceError::NotFound("Judge without a persisted id".to_string())
        })?;

        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                validate_judge_fields(judge)?;
                let judges = queries::judges::list_judges(conn)?;
                ensure_can_demote(&judges, judge_id, judge.is_titular)?;
                mutations::judges::update_judge(conn, judge_id, judge)?;
                restore_titular_invariant(conn)
            })
    }

    /// Deletes a judge and restores the titular invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the judge does not exist, the delete fails, or
    /// the invariant survives violated.
    pub fn delete_judge(&mut self, judge_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                mutations::judges::delete_judge(conn, judge_id)?;
                restore_titular_invariant(conn)
            })
    }

    /// Retrieves a judge by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no judge has the given ID.
    pub fn get_judge(&mut self, judge_id: i64) -> Result<Judge, PersistenceError> {
        queries::judges::get_judge(&mut self.conn, judge_id)
    }

    /// Lists all judges, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_judges(&mut self) -> Result<Vec<Judge>, PersistenceError> {
        queries::judges::list_judges(&mut self.conn)
    }

    // ========================================================================
    // Draws
    // ========================================================================

    /// Creates a draw and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields or a store failure.
    pub fn create_draw(&mut self, draw: &Draw) -> Result<i64, PersistenceError> {
        validate_draw_fields(draw)?;
        mutations::draws::insert_draw(&mut self.conn, draw)
    }

    /// Updates a persisted draw.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid fields, a missing id, or a store failure.
    pub fn update_draw(&mut self, draw: &Draw) -> Result<(), PersistenceError> {
        let draw_id = draw
            .draw_id
            .ok_or_else(|| PersistenceError::NotFound("Draw without a persisted id".to_string()))?;
        validate_draw_fields(draw)?;
        mutations::draws::update_draw(&mut self.conn, draw_id, draw)
    }

    /// Retrieves a draw by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no draw has the given ID.
    pub fn get_draw(&mut self, draw_id: i64) -> Result<Draw, PersistenceError> {
        queries::draws::get_draw(&mut self.conn, draw_id)
    }

    /// Lists all draws, most recent draw date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_draws(&mut self) -> Result<Vec<Draw>, PersistenceError> {
        queries::draws::list_draws(&mut self.conn)
    }

    /// Lists all draws for a reference year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_draws_for_year(
        &mut self,
        reference_year: u16,
    ) -> Result<Vec<Draw>, PersistenceError> {
        queries::draws::list_draws_for_year(&mut self.conn, reference_year)
    }

    /// Marks a draw as held.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the draw does not exist.
    pub fn mark_draw_held(&mut self, draw_id: i64) -> Result<(), PersistenceError> {
        mutations::draws::set_draw_status(&mut self.conn, draw_id, DrawStatus::Held)
    }

    /// Cancels a draw. Assignments and ballots are frozen afterwards.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the draw does not exist.
    pub fn cancel_draw(&mut self, draw_id: i64) -> Result<(), PersistenceError> {
        mutations::draws::set_draw_status(&mut self.conn, draw_id, DrawStatus::Cancelled)
    }

    /// Deletes a draw; its assignments, ballots, and service records
    /// cascade with it.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the draw does not exist.
    pub fn delete_draw(&mut self, draw_id: i64) -> Result<(), PersistenceError> {
        mutations::draws::delete_draw(&mut self.conn, draw_id)
    }

    /// Builds the eligible pool for a reference year, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored date is malformed.
    pub fn eligible_pool(&mut self, reference_year: u16) -> Result<Vec<Juror>, PersistenceError> {
        queries::jurors::eligible_pool(&mut self.conn, reference_year)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Assigns a juror to a draw with the given role.
    ///
    /// Eligibility is advisory for manual assignment and is not checked
    /// here; duplicates are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw or juror does not exist, the draw is
    /// cancelled, or the pair is already assigned.
    pub fn assign_juror(
        &mut self,
        draw_id: i64,
        juror_id: i64,
        role: AssignmentRole,
    ) -> Result<i64, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                ensure_draw_editable(conn, draw_id)?;
                queries::jurors::get_juror(conn, juror_id)?;
                if queries::draws::find_assignment(conn, draw_id, juror_id)?.is_some() {
                    return Err(PersistenceError::DuplicateAssignment { draw_id, juror_id });
                }
                mutations::draws::insert_assignment(conn, draw_id, juror_id, role)
            })
    }

    /// Assigns a random selection's jurors to a draw in one transaction.
    ///
    /// Titulars and suplentes land with their selected roles; any juror
    /// already assigned to the draw fails the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is missing or cancelled, or any pair
    /// is already assigned.
    pub fn apply_selection(
        &mut self,
        draw_id: i64,
        selection: &DrawSelection,
    ) -> Result<(), PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                ensure_draw_editable(conn, draw_id)?;
                let roles = selection
                    .titulars
                    .iter()
                    .map(|id| (*id, AssignmentRole::Titular))
                    .chain(
                        selection
                            .suplentes
                            .iter()
                            .map(|id| (*id, AssignmentRole::Suplente)),
                    );
                for (juror_id, role) in roles {
                    if queries::draws::find_assignment(conn, draw_id, juror_id)?.is_some() {
                        return Err(PersistenceError::DuplicateAssignment { draw_id, juror_id });
                    }
                    mutations::draws::insert_assignment(conn, draw_id, juror_id, role)?;
                }
                Ok(())
            })
    }

    /// Flips an assignment's role between titular and suplente.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is cancelled or the pair does not exist.
    pub fn toggle_assignment_role(
        &mut self,
        draw_id: i64,
        juror_id: i64,
    ) -> Result<AssignmentRole, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                ensure_draw_editable(conn, draw_id)?;
                let assignment = queries::draws::find_assignment(conn, draw_id, juror_id)?
                    .ok_or_else(|| {
                        PersistenceError::NotFound(format!(
                            "Assignment for juror {juror_id} in draw {draw_id}"
                        ))
                    })?;
                let new_role = assignment.role.toggled();
                mutations::draws::set_assignment_role(conn, draw_id, juror_id, new_role)?;
                Ok(new_role)
            })
    }

    /// Removes a juror from a draw.
    ///
    /// Already-generated ballots are untouched; regenerate them to
    /// reflect the removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is cancelled or the pair does not exist.
    pub fn remove_assignment(
        &mut self,
        draw_id: i64,
        juror_id: i64,
    ) -> Result<(), PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                ensure_draw_editable(conn, draw_id)?;
                mutations::draws::delete_assignment(conn, draw_id, juror_id)
            })
    }

    /// Lists a draw's assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_assignments(
        &mut self,
        draw_id: i64,
    ) -> Result<Vec<DrawAssignment>, PersistenceError> {
        queries::draws::list_assignments(&mut self.conn, draw_id)
    }

    // ========================================================================
    // Ballots
    // ========================================================================

    /// Regenerates a draw's ballots from its current assignments.
    ///
    /// Deletes the prior batch, numbers the assignments (titulars first,
    /// then by name), and inserts the fresh batch, all in one
    /// transaction. Zero assignments yield zero ballots, not an error.
    ///
    /// # Returns
    ///
    /// The number of ballots generated.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is missing or cancelled, or a write fails.
    pub fn generate_ballots(&mut self, draw_id: i64) -> Result<usize, PersistenceError> {
        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                ensure_draw_editable(conn, draw_id)?;
                mutations::ballots::delete_ballots_for_draw(conn, draw_id)?;
                let candidates = queries::draws::ballot_candidates(conn, draw_id)?;
                let slots = number_ballots(&candidates);
                mutations::ballots::insert_ballots(conn, draw_id, &slots)?;
                info!("Generated {} ballots for draw {}", slots.len(), draw_id);
                Ok(slots.len())
            })
    }

    /// Lists a draw's ballots in sequence order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_ballots(&mut self, draw_id: i64) -> Result<Vec<Ballot>, PersistenceError> {
        queries::ballots::list_ballots(&mut self.conn, draw_id)
    }

    /// Retrieves a ballot by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no ballot has the given ID.
    pub fn get_ballot(&mut self, ballot_id: i64) -> Result<Ballot, PersistenceError> {
        queries::ballots::get_ballot(&mut self.conn, ballot_id)
    }

    /// Sets a ballot's printable status.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no ballot has the given ID.
    pub fn set_ballot_status(
        &mut self,
        ballot_id: i64,
        status: BallotStatus,
    ) -> Result<(), PersistenceError> {
        mutations::ballots::set_ballot_status(&mut self.conn, ballot_id, status)
    }

    // ========================================================================
    // Last service
    // ========================================================================

    /// Marks the jurors who actually served on a draw's sitting.
    ///
    /// Clears any prior marks for the draw, records the new set, and then
    /// sets each named juror's last-service date to the draw's sitting
    /// date (with write-time normalization, so the twelve-month rest may
    /// apply). The juror table is written last; a partial failure leaves
    /// it untouched.
    ///
    /// Re-marking with a different set replaces the marks but does not
    /// revert earlier jurors' last-service dates, which are historical
    /// facts.
    ///
    /// # Arguments
    ///
    /// * `draw_id` - The draw whose sitting the jurors served on
    /// * `juror_ids` - The serving panel (at most 7 jurors)
    /// * `current_year` - The system clock's current year
    ///
    /// # Errors
    ///
    /// Returns an error if the panel exceeds the bound, the draw or any
    /// juror is missing, or a write fails.
    pub fn mark_last_service(
        &mut self,
        draw_id: i64,
        juror_ids: &[i64],
        current_year: i32,
    ) -> Result<(), PersistenceError> {
        validate_panel_size(juror_ids.len())?;

        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                let draw = queries::draws::get_draw(conn, draw_id)?;

                mutations::draws::delete_service_records_for_draw(conn, draw_id)?;
                mutations::draws::insert_service_records(
                    conn,
                    draw_id,
                    juror_ids,
                    &draw.sitting_date,
                )?;

                for &juror_id in juror_ids {
                    let mut juror = queries::jurors::get_juror(conn, juror_id)?;
                    juror.last_service_date = Some(draw.sitting_date.clone());
                    normalize_for_write(&mut juror, current_year)?;
                    mutations::jurors::update_juror(conn, juror_id, &juror)?;
                }

                info!(
                    "Marked last service for {} jurors on draw {}",
                    juror_ids.len(),
                    draw_id
                );
                Ok(())
            })
    }

    /// Lists the last-service marks recorded for a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_service_records(
        &mut self,
        draw_id: i64,
    ) -> Result<Vec<ServiceRecordData>, PersistenceError> {
        queries::ballots::list_service_records(&mut self.conn, draw_id)
    }
}

/// Rejects mutation of a cancelled draw.
fn ensure_draw_editable(conn: &mut SqliteConnection, draw_id: i64) -> Result<(), PersistenceError> {
    let draw = queries::draws::get_draw(conn, draw_id)?;
    if draw.is_editable() {
        Ok(())
    } else {
        Err(PersistenceError::DrawNotEditable { draw_id })
    }
}

/// Re-establishes the titular invariant after a judge mutation.
///
/// Runs the fix-up, then verifies; a verification failure is a logic bug
/// and aborts the enclosing transaction.
fn restore_titular_invariant(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let judges = queries::judges::list_judges(conn)?;
    let resolution = resolve_titular(&judges);
    mutations::judges::apply_titular_resolution(conn, &resolution)?;

    let judges = queries::judges::list_judges(conn)?;
    if let Err(e) = verify_titular(&judges) {
        error!("Titular invariant violated after fix-up: {e}");
        return Err(PersistenceError::from(e));
    }
    Ok(())
}
