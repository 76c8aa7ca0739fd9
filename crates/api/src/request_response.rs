// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use jurado_domain::{Ballot, Draw, DrawAssignment, Judge, Juror};

/// API request to register a new juror.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterJurorRequest {
    /// The juror's CPF, formatted or bare digits.
    pub cpf: String,
    /// The juror's full name.
    pub name: String,
    /// Birth date (`YYYY-MM-DD`), if known.
    pub birth_date: Option<String>,
    /// Optional sponsoring-institution reference.
    pub institution_id: Option<i64>,
}

/// API request to update an existing juror record.
///
/// The last-service date is not editable here; it is owned by the
/// service-marking operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateJurorRequest {
    /// The juror to update.
    pub juror_id: i64,
    /// The juror's CPF, formatted or bare digits.
    pub cpf: String,
    /// The juror's full name.
    pub name: String,
    /// Birth date (`YYYY-MM-DD`), if known.
    pub birth_date: Option<String>,
    /// The juror's status (`Active` or `Inactive`).
    pub status: String,
    /// Why the juror is inactive, when status is `Inactive`.
    pub reason: Option<String>,
    /// Suspension end date (`YYYY-MM-DD`), for temporary suspensions.
    pub suspended_until: Option<String>,
    /// Optional sponsoring-institution reference.
    pub institution_id: Option<i64>,
}

/// A juror as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JurorInfo {
    /// The canonical juror identifier.
    pub juror_id: i64,
    /// The normalized eleven-digit CPF.
    pub cpf: String,
    /// The juror's full name.
    pub name: String,
    /// Birth date (`YYYY-MM-DD`), if known.
    pub birth_date: Option<String>,
    /// The juror's status.
    pub status: String,
    /// Why the juror is inactive, if inactive.
    pub reason: Option<String>,
    /// Suspension end date, for temporary suspensions.
    pub suspended_until: Option<String>,
    /// Date of the most recent sitting this juror served on.
    pub last_service_date: Option<String>,
    /// Sponsoring-institution reference, if any.
    pub institution_id: Option<i64>,
}

impl JurorInfo {
    /// Builds the API view of a persisted juror.
    #[must_use]
    pub fn from_juror(juror: &Juror) -> Self {
        Self {
            juror_id: juror.juror_id.unwrap_or_default(),
            cpf: juror.cpf.value().to_string(),
            name: juror.name.clone(),
            birth_date: juror.birth_date.clone(),
            status: juror.status.to_string(),
            reason: juror.reason.map(|r| r.to_string()),
            suspended_until: juror.suspended_until.clone(),
            last_service_date: juror.last_service_date.clone(),
            institution_id: juror.institution_id,
        }
    }
}

/// API response for a completed reactivation sweep.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SweepResponse {
    /// The date the sweep was evaluated against.
    pub today: String,
    /// The number of jurors reactivated.
    pub reactivated: usize,
}

/// API request to create a judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJudgeRequest {
    /// The judge's name.
    pub name: String,
    /// Whether the judge should hold the titular flag.
    pub is_titular: bool,
    /// The judge's status (`Active` or `Inactive`).
    pub status: String,
}

/// API request to update a judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateJudgeRequest {
    /// The judge to update.
    pub judge_id: i64,
    /// The judge's name.
    pub name: String,
    /// Whether the judge should hold the titular flag.
    pub is_titular: bool,
    /// The judge's status (`Active` or `Inactive`).
    pub status: String,
}

/// A judge as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JudgeInfo {
    /// The canonical judge identifier.
    pub judge_id: i64,
    /// The judge's name.
    pub name: String,
    /// Whether this judge is the district's titular judge of record.
    pub is_titular: bool,
    /// The judge's status.
    pub status: String,
}

impl JudgeInfo {
    /// Builds the API view of a persisted judge.
    #[must_use]
    pub fn from_judge(judge: &Judge) -> Self {
        Self {
            judge_id: judge.judge_id.unwrap_or_default(),
            name: judge.name.clone(),
            is_titular: judge.is_titular,
            status: judge.status.to_string(),
        }
    }
}

/// API request to schedule a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDrawRequest {
    /// The jury-duty year the draw is organized for.
    pub reference_year: u16,
    /// The date the draw is performed (`YYYY-MM-DD`).
    pub draw_date: String,
    /// The date of the sitting (`YYYY-MM-DD`).
    pub sitting_date: String,
    /// The wall-clock time of the sitting (`HH:MM`), if scheduled.
    pub sitting_time: Option<String>,
    /// The responsible judge, if assigned.
    pub judge_id: Option<i64>,
}

/// A draw as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawInfo {
    /// The canonical draw identifier.
    pub draw_id: i64,
    /// The jury-duty year the draw is organized for.
    pub reference_year: u16,
    /// The date the draw is performed.
    pub draw_date: String,
    /// The date of the sitting.
    pub sitting_date: String,
    /// The wall-clock time of the sitting, if scheduled.
    pub sitting_time: Option<String>,
    /// The responsible judge, if assigned.
    pub judge_id: Option<i64>,
    /// The draw's lifecycle state.
    pub status: String,
}

impl DrawInfo {
    /// Builds the API view of a persisted draw.
    #[must_use]
    pub fn from_draw(draw: &Draw) -> Self {
        Self {
            draw_id: draw.draw_id.unwrap_or_default(),
            reference_year: draw.reference_year,
            draw_date: draw.draw_date.clone(),
            sitting_date: draw.sitting_date.clone(),
            sitting_time: draw.sitting_time.clone(),
            judge_id: draw.judge_id,
            status: draw.status.to_string(),
        }
    }
}

/// API request to assign a juror to a draw by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignJurorRequest {
    /// The draw to assign into.
    pub draw_id: i64,
    /// The juror to assign.
    pub juror_id: i64,
    /// The role (`Titular` or `Suplente`).
    pub role: String,
}

/// An assignment as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignmentInfo {
    /// The assigned juror.
    pub juror_id: i64,
    /// The juror's role in the draw.
    pub role: String,
}

impl AssignmentInfo {
    /// Builds the API view of a persisted assignment.
    #[must_use]
    pub fn from_assignment(assignment: &DrawAssignment) -> Self {
        Self {
            juror_id: assignment.juror_id,
            role: assignment.role.to_string(),
        }
    }
}

/// API request to perform a random draw from the eligible pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformDrawRequest {
    /// The draw to populate.
    pub draw_id: i64,
    /// The number of titulars to select.
    pub num_titular: usize,
    /// The number of suplentes to select.
    pub num_suplente: usize,
}

/// API response for a completed random draw.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PerformDrawResponse {
    /// The populated draw.
    pub draw_id: i64,
    /// The size of the eligible pool sampled from.
    pub pool_size: usize,
    /// The jurors selected as titulars.
    pub titulars: Vec<i64>,
    /// The jurors selected as suplentes.
    pub suplentes: Vec<i64>,
}

/// A ballot as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BallotInfo {
    /// The canonical ballot identifier.
    pub ballot_id: i64,
    /// The juror this ballot identifies.
    pub juror_id: i64,
    /// The ballot's sequence number within the draw.
    pub sequence: u32,
    /// The ballot's printable state.
    pub status: String,
}

impl BallotInfo {
    /// Builds the API view of a persisted ballot.
    #[must_use]
    pub fn from_ballot(ballot: &Ballot) -> Self {
        Self {
            ballot_id: ballot.ballot_id.unwrap_or_default(),
            juror_id: ballot.juror_id,
            sequence: ballot.sequence,
            status: ballot.status.to_string(),
        }
    }
}

/// API response for a ballot regeneration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateBallotsResponse {
    /// The draw whose ballots were regenerated.
    pub draw_id: i64,
    /// The number of ballots in the fresh batch.
    pub ballot_count: usize,
}

/// API request to mark which jurors actually served on a sitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkServiceRequest {
    /// The draw whose sitting the jurors served on.
    pub draw_id: i64,
    /// The serving panel.
    pub juror_ids: Vec<i64>,
}
