// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The CPF is structurally invalid.
    InvalidCpf(String),
    /// A name field is empty or invalid.
    InvalidName(String),
    /// A date string is not a well-formed `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// Description of the validation failure.
        reason: String,
    },
    /// A time-of-day string is not a well-formed `HH:MM` value.
    InvalidTime(String),
    /// A juror status string is not a recognized value.
    InvalidJurorStatus(String),
    /// An inactivity reason string is not a recognized value.
    InvalidInactivityReason(String),
    /// A judge status string is not a recognized value.
    InvalidJudgeStatus(String),
    /// A draw status string is not a recognized value.
    InvalidDrawStatus(String),
    /// An assignment role string is not a recognized value.
    InvalidAssignmentRole(String),
    /// A ballot status string is not a recognized value.
    InvalidBallotStatus(String),
    /// Reference year is outside the supported range.
    InvalidReferenceYear {
        /// The rejected year value.
        year: u16,
    },
    /// An active juror carries an inactivity reason or suspension end date.
    ActiveJurorWithReason {
        /// The juror's CPF.
        cpf: String,
    },
    /// A suspension end date is present without a `TemporarySuspension` reason.
    SuspensionWithoutReason {
        /// The juror's CPF.
        cpf: String,
    },
    /// A `TemporarySuspension` reason is present without a suspension end date.
    SuspensionWithoutEndDate {
        /// The juror's CPF.
        cpf: String,
    },
    /// A deliberation panel exceeds the legal maximum size.
    PanelTooLarge {
        /// The rejected panel size.
        count: usize,
        /// The legal maximum.
        max: usize,
    },
    /// An update would leave the district without a titular judge.
    SoleTitularDemotion {
        /// The name of the judge being demoted.
        judge_name: String,
    },
    /// The eligible pool is too small for the requested selection.
    InsufficientPool {
        /// The total number of jurors requested.
        requested: usize,
        /// The number of eligible jurors available.
        available: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCpf(msg) => write!(f, "Invalid CPF: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidDate {
                date_string,
                reason,
            } => {
                write!(f, "Invalid date '{date_string}': {reason}")
            }
            Self::InvalidTime(msg) => write!(f, "Invalid time: {msg}"),
            Self::InvalidJurorStatus(value) => write!(f, "Unknown juror status: {value}"),
            Self::InvalidInactivityReason(value) => {
                write!(f, "Unknown inactivity reason: {value}")
            }
            Self::InvalidJudgeStatus(value) => write!(f, "Unknown judge status: {value}"),
            Self::InvalidDrawStatus(value) => write!(f, "Unknown draw status: {value}"),
            Self::InvalidAssignmentRole(value) => {
                write!(f, "Unknown assignment role: {value}")
            }
            Self::InvalidBallotStatus(value) => write!(f, "Unknown ballot status: {value}"),
            Self::InvalidReferenceYear { year } => {
                write!(f, "Reference year {year} is outside the supported range")
            }
            Self::ActiveJurorWithReason { cpf } => {
                write!(
                    f,
                    "Active juror {cpf} must not carry an inactivity reason or suspension end date"
                )
            }
            Self::SuspensionWithoutReason { cpf } => {
                write!(
                    f,
                    "Juror {cpf} has a suspension end date but is not temporarily suspended"
                )
            }
            Self::SuspensionWithoutEndDate { cpf } => {
                write!(
                    f,
                    "Juror {cpf} is temporarily suspended but has no suspension end date"
                )
            }
            Self::PanelTooLarge { count, max } => {
                write!(
                    f,
                    "Deliberation panel of {count} jurors exceeds the legal maximum of {max}"
                )
            }
            Self::SoleTitularDemotion { judge_name } => {
                write!(
                    f,
                    "Cannot demote judge '{judge_name}': at least one judge must remain titular"
                )
            }
            Self::InsufficientPool {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Cannot select {requested} jurors from an eligible pool of {available}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
