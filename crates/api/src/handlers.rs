// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use rand::Rng;
use tracing::info;

use jurado::{Clock, select_draw};
use jurado_domain::{
    Cpf, Draw, InactivityReason, Judge, JudgeStatus, Juror, JurorStatus,
};
use jurado_persistence::Persistence;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignJurorRequest, AssignmentInfo, BallotInfo, CreateDrawRequest, CreateJudgeRequest,
    DrawInfo, GenerateBallotsResponse, JudgeInfo, JurorInfo, MarkServiceRequest,
    PerformDrawRequest, PerformDrawResponse, RegisterJurorRequest, SweepResponse,
    UpdateJudgeRequest, UpdateJurorRequest,
};

/// Registers a new juror.
///
/// # Errors
///
/// Returns an error on an invalid CPF or name, a duplicate CPF, or a
/// store failure.
pub fn register_juror(
    persistence: &mut Persistence,
    clock: &impl Clock,
    request: RegisterJurorRequest,
) -> Result<JurorInfo, ApiError> {
    let cpf = Cpf::new(&request.cpf).map_err(translate_domain_error)?;
    let mut juror = Juror::new(cpf, request.name, request.birth_date);
    juror.institution_id = request.institution_id;

    let juror_id = persistence.register_juror(&juror, clock.current_year())?;
    let stored = persistence.get_juror(juror_id)?;
    info!("Registered juror {} ({})", stored.name, stored.cpf);
    Ok(JurorInfo::from_juror(&stored))
}

/// Updates a juror record, applying write-time normalization.
///
/// # Errors
///
/// Returns an error on invalid fields, an unknown juror, a CPF owned by
/// another juror, or a store failure.
pub fn update_juror(
    persistence: &mut Persistence,
    clock: &impl Clock,
    request: UpdateJurorRequest,
) -> Result<JurorInfo, ApiError> {
    let cpf = Cpf::new(&request.cpf).map_err(translate_domain_error)?;
    let status: JurorStatus = request.status.parse().map_err(translate_domain_error)?;
    let reason = request
        .reason
        .as_deref()
        .map(InactivityReason::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let existing = persistence.get_juror(request.juror_id)?;
    let juror = Juror {
        juror_id: Some(request.juror_id),
        cpf,
        name: request.name,
        birth_date: request.birth_date,
        status,
        reason,
        suspended_until: request.suspended_until,
        last_service_date: existing.last_service_date,
        institution_id: request.institution_id,
    };

    persistence.update_juror(&juror, clock.current_year())?;
    let stored = persistence.get_juror(request.juror_id)?;
    Ok(JurorInfo::from_juror(&stored))
}

/// Retrieves a juror by ID.
///
/// # Errors
///
/// Returns an error if the juror does not exist.
pub fn get_juror(persistence: &mut Persistence, juror_id: i64) -> Result<JurorInfo, ApiError> {
    let juror = persistence.get_juror(juror_id)?;
    Ok(JurorInfo::from_juror(&juror))
}

/// Lists all jurors, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_jurors(persistence: &mut Persistence) -> Result<Vec<JurorInfo>, ApiError> {
    let jurors = persistence.list_jurors()?;
    Ok(jurors.iter().map(JurorInfo::from_juror).collect())
}

/// Deletes a juror with no draw history.
///
/// # Errors
///
/// Returns a conflict if the juror is referenced by any assignment or
/// service record.
pub fn delete_juror(persistence: &mut Persistence, juror_id: i64) -> Result<(), ApiError> {
    persistence.delete_juror(juror_id)?;
    Ok(())
}

/// Runs the batch reactivation sweep against the clock's today.
///
/// # Errors
///
/// Returns an error if the sweep transaction fails.
pub fn run_reactivation_sweep(
    persistence: &mut Persistence,
    clock: &impl Clock,
) -> Result<SweepResponse, ApiError> {
    let today = clock.today_iso();
    let reactivated = persistence.reactivation_sweep(&today)?;
    Ok(SweepResponse { today, reactivated })
}

/// Lists the jurors eligible for a reference year, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored record is corrupt.
pub fn eligible_pool(
    persistence: &mut Persistence,
    reference_year: u16,
) -> Result<Vec<JurorInfo>, ApiError> {
    let pool = persistence.eligible_pool(reference_year)?;
    Ok(pool.iter().map(JurorInfo::from_juror).collect())
}

/// Creates a judge; the titular invariant is restored afterwards.
///
/// # Errors
///
/// Returns an error on invalid fields or a store failure.
pub fn create_judge(
    persistence: &mut Persistence,
    request: CreateJudgeRequest,
) -> Result<JudgeInfo, ApiError> {
    let status: JudgeStatus = request.status.parse().map_err(translate_domain_error)?;
    let judge = Judge::new(request.name, request.is_titular, status);

    let judge_id = persistence.create_judge(&judge)?;
    let stored = persistence.get_judge(judge_id)?;
    Ok(JudgeInfo::from_judge(&stored))
}

/// Updates a judge; demoting the sole titular is rejected.
///
/// # Errors
///
/// Returns an error on invalid fields, an unknown judge, a sole-titular
/// demotion, or a store failure.
pub fn update_judge(
    persistence: &mut Persistence,
    request: UpdateJudgeRequest,
) -> Result<JudgeInfo, ApiError> {
    let status: JudgeStatus = request.status.parse().map_err(translate_domain_error)?;
    let judge = Judge {
        judge_id: Some(request.judge_id),
        name: request.name,
        is_titular: request.is_titular,
        status,
    };

    persistence.update_judge(&judge)?;
    let stored = persistence.get_judge(request.judge_id)?;
    Ok(JudgeInfo::from_judge(&stored))
}

/// Deletes a judge; the titular invariant is restored afterwards.
///
/// # Errors
///
/// Returns an error if the judge does not exist or the delete fails.
pub fn delete_judge(persistence: &mut Persistence, judge_id: i64) -> Result<(), ApiError> {
    persistence.delete_judge(judge_id)?;
    Ok(())
}

/// Lists all judges, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_judges(persistence: &mut Persistence) -> Result<Vec<JudgeInfo>, ApiError> {
    let judges = persistence.list_judges()?;
    Ok(judges.iter().map(JudgeInfo::from_judge).collect())
}

/// Schedules a new draw.
///
/// # Errors
///
/// Returns an error on invalid dates or an out-of-range reference year.
pub fn create_draw(
    persistence: &mut Persistence,
    request: CreateDrawRequest,
) -> Result<DrawInfo, ApiError> {
    let draw = Draw::new(
        request.reference_year,
        request.draw_date,
        request.sitting_date,
        request.sitting_time,
        request.judge_id,
    );

    let draw_id = persistence.create_draw(&draw)?;
    let stored = persistence.get_draw(draw_id)?;
    Ok(DrawInfo::from_draw(&stored))
}

/// Retrieves a draw by ID.
///
/// # Errors
///
/// Returns an error if the draw does not exist.
pub fn get_draw(persistence: &mut Persistence, draw_id: i64) -> Result<DrawInfo, ApiError> {
    let draw = persistence.get_draw(draw_id)?;
    Ok(DrawInfo::from_draw(&draw))
}

/// Lists all draws, most recent draw date first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_draws(persistence: &mut Persistence) -> Result<Vec<DrawInfo>, ApiError> {
    let draws = persistence.list_draws()?;
    Ok(draws.iter().map(DrawInfo::from_draw).collect())
}

/// Lists the draws organized for one reference year.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_draws_for_year(
    persistence: &mut Persistence,
    reference_year: u16,
) -> Result<Vec<DrawInfo>, ApiError> {
    let draws = persistence.list_draws_for_year(reference_year)?;
    Ok(draws.iter().map(DrawInfo::from_draw).collect())
}

/// Marks a draw's sitting as held.
///
/// # Errors
///
/// Returns an error if the draw does not exist.
pub fn mark_draw_held(persistence: &mut Persistence, draw_id: i64) -> Result<(), ApiError> {
    persistence.mark_draw_held(draw_id)?;
    Ok(())
}

/// Cancels a draw, freezing its assignments and ballots.
///
/// # Errors
///
/// Returns an error if the draw does not exist.
pub fn cancel_draw(persistence: &mut Persistence, draw_id: i64) -> Result<(), ApiError> {
    persistence.cancel_draw(draw_id)?;
    Ok(())
}

/// Assigns a juror to a draw by hand.
///
/// Eligibility is advisory for manual assignment; duplicates and
/// cancelled draws are rejected.
///
/// # Errors
///
/// Returns an error on an unknown role, a missing draw or juror, a
/// cancelled draw, or a duplicate assignment.
pub fn assign_juror(
    persistence: &mut Persistence,
    request: AssignJurorRequest,
) -> Result<AssignmentInfo, ApiError> {
    let role = jurado_domain::AssignmentRole::parse(&request.role)
        .map_err(translate_domain_error)?;
    persistence.assign_juror(request.draw_id, request.juror_id, role)?;
    Ok(AssignmentInfo {
        juror_id: request.juror_id,
        role: role.to_string(),
    })
}

/// Flips an assignment between titular and suplente.
///
/// # Errors
///
/// Returns an error if the draw is cancelled or the pair does not exist.
pub fn toggle_assignment_role(
    persistence: &mut Persistence,
    draw_id: i64,
    juror_id: i64,
) -> Result<AssignmentInfo, ApiError> {
    let role = persistence.toggle_assignment_role(draw_id, juror_id)?;
    Ok(AssignmentInfo {
        juror_id,
        role: role.to_string(),
    })
}

/// Removes a juror from a draw.
///
/// # Errors
///
/// Returns an error if the draw is cancelled or the pair does not exist.
pub fn remove_assignment(
    persistence: &mut Persistence,
    draw_id: i64,
    juror_id: i64,
) -> Result<(), ApiError> {
    persistence.remove_assignment(draw_id, juror_id)?;
    Ok(())
}

/// Lists a draw's assignments.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_assignments(
    persistence: &mut Persistence,
    draw_id: i64,
) -> Result<Vec<AssignmentInfo>, ApiError> {
    let assignments = persistence.list_assignments(draw_id)?;
    Ok(assignments
        .iter()
        .map(AssignmentInfo::from_assignment)
        .collect())
}

/// Performs a random draw from the eligible pool and records the result.
///
/// The pool is read for the draw's reference year; selection is uniform
/// and without replacement, so no juror holds both roles.
///
/// # Errors
///
/// Returns an error if the draw is missing or cancelled, the pool is too
/// small, or any selected juror is already assigned.
pub fn perform_draw<R: Rng + ?Sized>(
    persistence: &mut Persistence,
    request: PerformDrawRequest,
    rng: &mut R,
) -> Result<PerformDrawResponse, ApiError> {
    let draw = persistence.get_draw(request.draw_id)?;
    let pool: Vec<i64> = persistence
        .eligible_pool(draw.reference_year)?
        .iter()
        .filter_map(|j| j.juror_id)
        .collect();

    let selection = select_draw(&pool, request.num_titular, request.num_suplente, rng)
        .map_err(translate_core_error)?;
    persistence.apply_selection(request.draw_id, &selection)?;
    info!(
        "Drew {} titulars and {} suplentes for draw {}",
        selection.titulars.len(),
        selection.suplentes.len(),
        request.draw_id
    );

    Ok(PerformDrawResponse {
        draw_id: request.draw_id,
        pool_size: pool.len(),
        titulars: selection.titulars,
        suplentes: selection.suplentes,
    })
}

/// Regenerates a draw's ballots from its current assignments.
///
/// # Errors
///
/// Returns an error if the draw is missing or cancelled.
pub fn generate_ballots(
    persistence: &mut Persistence,
    draw_id: i64,
) -> Result<GenerateBallotsResponse, ApiError> {
    let ballot_count = persistence.generate_ballots(draw_id)?;
    Ok(GenerateBallotsResponse {
        draw_id,
        ballot_count,
    })
}

/// Lists a draw's ballots in sequence order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_ballots(
    persistence: &mut Persistence,
    draw_id: i64,
) -> Result<Vec<BallotInfo>, ApiError> {
    let ballots = persistence.list_ballots(draw_id)?;
    Ok(ballots.iter().map(BallotInfo::from_ballot).collect())
}

/// Marks which jurors actually served on a draw's sitting.
///
/// # Errors
///
/// Returns an error if the panel exceeds the legal bound, the draw or a
/// juror is missing, or a write fails.
pub fn mark_last_service(
    persistence: &mut Persistence,
    clock: &impl Clock,
    request: MarkServiceRequest,
) -> Result<(), ApiError> {
    persistence.mark_last_service(request.draw_id, &request.juror_ids, clock.current_year())?;
    Ok(())
}
