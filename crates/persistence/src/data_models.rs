// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row models and their conversions to domain types.
//!
//! Enum fields are stored as their variant-name strings and parsed back
//! into closed domain enums here, at the store boundary only. A row that
//! fails to parse is a corrupt record and surfaces as a
//! [`PersistenceError::Domain`] rather than a silent default.

use std::str::FromStr;

use diesel::prelude::*;

use crate::diesel_schema::{ballots, draw_assignments, draws, judges, jurors, service_records};
use crate::error::PersistenceError;
use jurado_domain::{
    AssignmentRole, Ballot, BallotStatus, Cpf, Draw, DrawAssignment, DrawStatus, InactivityReason,
    Judge, JudgeStatus, Juror, JurorStatus,
};

/// Diesel Queryable struct for juror rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = jurors)]
pub(crate) struct JurorRow {
    pub juror_id: i64,
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<String>,
    pub status: String,
    pub inactivity_reason: Option<String>,
    pub suspended_until: Option<String>,
    pub last_service_date: Option<String>,
    pub institution_id: Option<i64>,
}

impl TryFrom<JurorRow> for Juror {
    type Error = PersistenceError;

    fn try_from(row: JurorRow) -> Result<Self, Self::Error> {
        let reason = match row.inactivity_reason {
            Some(stored) => Some(InactivityReason::parse(&stored)?),
            None => None,
        };
        Ok(Self {
            juror_id: Some(row.juror_id),
            cpf: Cpf::from_stored(&row.cpf)?,
            name: row.name,
            birth_date: row.birth_date,
            status: JurorStatus::from_str(&row.status)?,
            reason,
            suspended_until: row.suspended_until,
            last_service_date: row.last_service_date,
            institution_id: row.institution_id,
        })
    }
}

/// Diesel Queryable struct for judge rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = judges)]
pub(crate) struct JudgeRow {
    pub judge_id: i64,
    pub name: String,
    pub is_titular: i32,
    pub status: String,
}

impl TryFrom<JudgeRow> for Judge {
    type Error = PersistenceError;

    fn try_from(row: JudgeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            judge_id: Some(row.judge_id),
            name: row.name,
            is_titular: row.is_titular != 0,
            status: JudgeStatus::from_str(&row.status)?,
        })
    }
}

/// Diesel Queryable struct for draw rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = draws)]
pub(crate) struct DrawRow {
    pub draw_id: i64,
    pub reference_year: i32,
    pub draw_date: String,
    pub sitting_date: String,
    pub sitting_time: Option<String>,
    pub judge_id: Option<i64>,
    pub status: String,
}

impl TryFrom<DrawRow> for Draw {
    type Error = PersistenceError;

    fn try_from(row: DrawRow) -> Result<Self, Self::Error> {
        let reference_year = u16::try_from(row.reference_year).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "Stored reference year {} is out of range",
                row.reference_year
            ))
        })?;
        Ok(Self {
            draw_id: Some(row.draw_id),
            reference_year,
            draw_date: row.draw_date,
            sitting_date: row.sitting_date,
            sitting_time: row.sitting_time,
            judge_id: row.judge_id,
            status: DrawStatus::from_str(&row.status)?,
        })
    }
}

/// Diesel Queryable struct for draw assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = draw_assignments)]
pub(crate) struct AssignmentRow {
    pub assignment_id: i64,
    pub draw_id: i64,
    pub juror_id: i64,
    pub role: String,
}

impl TryFrom<AssignmentRow> for DrawAssignment {
    type Error = PersistenceError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            assignment_id: Some(row.assignment_id),
            draw_id: row.draw_id,
            juror_id: row.juror_id,
            role: AssignmentRole::parse(&row.role)?,
        })
    }
}

/// Diesel Queryable struct for ballot rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = ballots)]
pub(crate) struct BallotRow {
    pub ballot_id: i64,
    pub draw_id: i64,
    pub juror_id: i64,
    pub sequence_number: i32,
    pub status: String,
}

impl TryFrom<BallotRow> for Ballot {
    type Error = PersistenceError;

    fn try_from(row: BallotRow) -> Result<Self, Self::Error> {
        let sequence = u32::try_from(row.sequence_number).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "Stored sequence number {} is out of range",
                row.sequence_number
            ))
        })?;
        Ok(Self {
            ballot_id: Some(row.ballot_id),
            draw_id: row.draw_id,
            juror_id: row.juror_id,
            sequence,
            status: BallotStatus::parse(&row.status)?,
        })
    }
}

/// Diesel Queryable struct for service record rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = service_records)]
pub(crate) struct ServiceRecordRow {
    pub service_record_id: i64,
    pub draw_id: i64,
    pub juror_id: i64,
    pub service_date: String,
}

/// A sponsoring institution that jurors may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionData {
    pub institution_id: i64,
    pub name: String,
    pub city: Option<String>,
}

/// One recorded last-service mark tied to a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecordData {
    pub service_record_id: i64,
    pub draw_id: i64,
    pub juror_id: i64,
    pub service_date: String,
}

impl From<ServiceRecordRow> for ServiceRecordData {
    fn from(row: ServiceRecordRow) -> Self {
        Self {
            service_record_id: row.service_record_id,
            draw_id: row.draw_id,
            juror_id: row.juror_id,
            service_date: row.service_date,
        }
    }
}
