// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use jurado::CoreError;
use jurado_domain::DomainError;
use jurado_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation conflicts with existing state.
    Conflict {
        /// The resource type involved in the conflict.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCpf(msg) => ApiError::InvalidInput {
            field: String::from("cpf"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidDate {
            date_string,
            reason,
        } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}': {reason}"),
        },
        DomainError::InvalidTime(msg) => ApiError::InvalidInput {
            field: String::from("sitting_time"),
            message: msg,
        },
        DomainError::InvalidJurorStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown juror status '{value}'"),
        },
        DomainError::InvalidInactivityReason(value) => ApiError::InvalidInput {
            field: String::from("reason"),
            message: format!("Unknown inactivity reason '{value}'"),
        },
        DomainError::InvalidJudgeStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown judge status '{value}'"),
        },
        DomainError::InvalidDrawStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown draw status '{value}'"),
        },
        DomainError::InvalidAssignmentRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown assignment role '{value}'"),
        },
        DomainError::InvalidBallotStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown ballot status '{value}'"),
        },
        DomainError::InvalidReferenceYear { year } => ApiError::InvalidInput {
            field: String::from("reference_year"),
            message: format!("Reference year {year} is outside the supported range"),
        },
        DomainError::ActiveJurorWithReason { cpf } => ApiError::DomainRuleViolation {
            rule: String::from("active_juror_consistency"),
            message: format!("Active juror {cpf} cannot carry an inactivity reason"),
        },
        DomainError::SuspensionWithoutReason { cpf } => ApiError::DomainRuleViolation {
            rule: String::from("suspension_consistency"),
            message: format!(
                "Juror {cpf} has a suspension end date without a temporary suspension"
            ),
        },
        DomainError::SuspensionWithoutEndDate { cpf } => ApiError::DomainRuleViolation {
            rule: String::from("suspension_consistency"),
            message: format!("Juror {cpf} is temporarily suspended without an end date"),
        },
        DomainError::PanelTooLarge { count, max } => ApiError::DomainRuleViolation {
            rule: String::from("panel_size"),
            message: format!("Panel of {count} jurors exceeds the legal maximum of {max}"),
        },
        DomainError::SoleTitularDemotion { judge_name } => ApiError::DomainRuleViolation {
            rule: String::from("titular_judge"),
            message: format!(
                "Cannot demote '{judge_name}': the district would be left without a titular judge"
            ),
        },
        DomainError::InsufficientPool {
            requested,
            available,
        } => ApiError::DomainRuleViolation {
            rule: String::from("draw_pool"),
            message: format!("Requested {requested} jurors but only {available} are eligible"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvariantViolation(msg) => ApiError::Internal {
            message: format!("Invariant violation: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Store-level failures surface as `Internal`; conflicts and lookups keep
/// their identity.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        PersistenceError::DuplicateCpf(cpf) => ApiError::Conflict {
            resource_type: String::from("Juror"),
            message: format!("CPF {cpf} is already registered"),
        },
        PersistenceError::DuplicateAssignment { draw_id, juror_id } => ApiError::Conflict {
            resource_type: String::from("Assignment"),
            message: format!("Juror {juror_id} is already assigned to draw {draw_id}"),
        },
        PersistenceError::JurorReferenced { juror_id } => ApiError::Conflict {
            resource_type: String::from("Juror"),
            message: format!(
                "Juror {juror_id} is referenced by a draw and cannot be deleted"
            ),
        },
        PersistenceError::DrawNotEditable { draw_id } => ApiError::Conflict {
            resource_type: String::from("Draw"),
            message: format!("Draw {draw_id} is cancelled and cannot be modified"),
        },
        PersistenceError::Domain(domain_err) => translate_domain_error(domain_err),
        PersistenceError::InvariantViolation(msg) => ApiError::Internal {
            message: format!("Invariant violation: {msg}"),
        },
        PersistenceError::DatabaseError(_)
        | PersistenceError::DatabaseConnectionFailed(_)
        | PersistenceError::MigrationFailed(_)
        | PersistenceError::QueryFailed(_)
        | PersistenceError::InitializationError(_)
        | PersistenceError::ForeignKeyEnforcementNotEnabled => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
