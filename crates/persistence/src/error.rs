// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use jurado::CoreError;
use jurado_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested resource was not found.
    NotFound(String),
    /// A CPF is already registered to another juror.
    DuplicateCpf(String),
    /// The (draw, juror) pair is already assigned.
    DuplicateAssignment { draw_id: i64, juror_id: i64 },
    /// The juror is referenced by a draw and cannot be deleted.
    JurorReferenced { juror_id: i64 },
    /// The draw is cancelled and rejects assignment and ballot mutation.
    DrawNotEditable { draw_id: i64 },
    /// A domain rule was violated by the supplied data.
    Domain(DomainError),
    /// An internal consistency check failed after a supposedly-safe operation.
    InvariantViolation(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DuplicateCpf(cpf) => write!(f, "CPF {cpf} is already registered"),
            Self::DuplicateAssignment { draw_id, juror_id } => {
                write!(f, "Juror {juror_id} is already assigned to draw {draw_id}")
            }
            Self::JurorReferenced { juror_id } => {
                write!(
                    f,
                    "Juror {juror_id} cannot be deleted: referenced by a draw"
                )
            }
            Self::DrawNotEditable { draw_id } => {
                write!(f, "Draw {draw_id} is cancelled and cannot be modified")
            }
            Self::Domain(err) => write!(f, "{err}"),
            Self::InvariantViolation(msg) => write!(f, "Invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(inner) => Self::Domain(inner),
            CoreError::InvariantViolation(msg) => Self::InvariantViolation(msg),
        }
    }
}
