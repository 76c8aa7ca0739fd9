// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV roster import for juror records.
//!
//! A roster is validated row by row before any write. An import with any
//! invalid row performs no writes; the preview result carries per-row
//! errors with line numbers so the roster can be fixed and resubmitted.

use csv::StringRecord;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::info;

use jurado::Clock;
use jurado_domain::{Cpf, InactivityReason, Juror, JurorStatus, validate_juror_fields};
use jurado_persistence::Persistence;

use crate::error::ApiError;

/// Errors raised by roster parsing and import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The CSV header row is missing required columns.
    #[error("Missing required headers: {0}")]
    MissingHeaders(String),
    /// The CSV could not be read.
    #[error("Failed to read roster: {0}")]
    Unreadable(String),
    /// The roster contains invalid rows and nothing was imported.
    #[error("Roster has {invalid_count} invalid rows out of {total_rows}; nothing was imported")]
    InvalidRows {
        /// The number of rejected rows.
        invalid_count: usize,
        /// The total number of data rows.
        total_rows: usize,
    },
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self::InvalidInput {
            field: String::from("roster"),
            message: err.to_string(),
        }
    }
}

/// Status of a single roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// A single row result from roster validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRowResult {
    /// The row number (1-based, excluding the header).
    pub row_number: usize,
    /// The parsed name, if present.
    pub name: Option<String>,
    /// The normalized CPF, if valid.
    pub cpf: Option<String>,
    /// The row status.
    pub status: RosterRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Result of a roster preview pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPreview {
    /// Per-row validation results.
    pub rows: Vec<RosterRowResult>,
    /// Total number of data rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Result of a completed roster import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterImportResult {
    /// The ids assigned to the imported jurors, in roster order.
    pub juror_ids: Vec<i64>,
}

/// Required roster column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["cpf", "name"];

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, RosterError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header_map.contains_key(**required))
        .map(|required| String::from(*required))
        .collect();

    if missing.is_empty() {
        Ok(header_map)
    } else {
        Err(RosterError::MissingHeaders(missing.join(", ")))
    }
}

/// Parses one roster row into a `Juror`, collecting every field error.
fn parse_roster_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<Juror, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let cpf_str = get_field("cpf").unwrap_or_else(|| {
        errors.push(String::from("cpf: required field is missing or empty"));
        String::new()
    });
    let name = get_field("name").unwrap_or_else(|| {
        errors.push(String::from("name: required field is missing or empty"));
        String::new()
    });
    let birth_date = get_field("birth_date");
    let status_str = get_field("status");
    let reason_str = get_field("reason");
    let suspended_until = get_field("suspended_until");

    if !errors.is_empty() {
        return Err(errors);
    }

    let cpf = match Cpf::new(&cpf_str) {
        Ok(cpf) => cpf,
        Err(e) => {
            errors.push(format!("cpf: {e}"));
            return Err(errors);
        }
    };

    let status = match status_str.as_deref() {
        None => JurorStatus::Active,
        Some(value) => match value.parse::<JurorStatus>() {
            Ok(status) => status,
            Err(e) => {
                errors.push(format!("status: {e}"));
                return Err(errors);
            }
        },
    };

    let reason = match reason_str.as_deref() {
        None => None,
        Some(value) => match InactivityReason::parse(value) {
            Ok(reason) => Some(reason),
            Err(e) => {
                errors.push(format!("reason: {e}"));
                return Err(errors);
            }
        },
    };

    let mut juror = Juror::new(cpf, name, birth_date);
    juror.status = status;
    juror.reason = reason;
    juror.suspended_until = suspended_until;

    if let Err(e) = validate_juror_fields(&juror) {
        errors.push(format!("validation: {e}"));
        return Err(errors);
    }

    Ok(juror)
}

/// Validates a parsed juror against the store and the roster itself.
fn validate_against_store(
    juror: &Juror,
    persistence: &mut Persistence,
    seen_cpfs: &HashSet<String>,
) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    if seen_cpfs.contains(juror.cpf.value()) {
        errors.push(format!(
            "cpf: {} appears more than once in the roster",
            juror.cpf
        ));
    }

    match persistence.find_juror_by_cpf(&juror.cpf) {
        Ok(Some(_)) => {
            errors.push(format!("cpf: {} is already registered", juror.cpf));
        }
        Ok(None) => {}
        Err(e) => errors.push(format!("cpf: lookup failed: {e}")),
    }

    errors
}

/// Parses and validates a roster without writing anything.
///
/// # Errors
///
/// Returns an error only when the CSV itself is unreadable or the header
/// row is missing required columns; row-level problems land in the
/// preview result.
pub fn preview_roster(
    persistence: &mut Persistence,
    csv_content: &str,
) -> Result<(RosterPreview, Vec<Juror>), RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| RosterError::Unreadable(e.to_string()))?
        .clone();
    let header_map = validate_headers(&headers)?;

    let mut rows: Vec<RosterRowResult> = Vec::new();
    let mut valid_jurors: Vec<Juror> = Vec::new();
    let mut seen_cpfs: HashSet<String> = HashSet::new();

    for (idx, record) in reader.records().enumerate() {
        let row_number = idx + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                rows.push(RosterRowResult {
                    row_number,
                    name: None,
                    cpf: None,
                    status: RosterRowStatus::Invalid,
                    errors: vec![format!("row: {e}")],
                });
                continue;
            }
        };

        match parse_roster_row(&record, &header_map) {
            Ok(juror) => {
                let store_errors = validate_against_store(&juror, persistence, &seen_cpfs);
                let row = RosterRowResult {
                    row_number,
                    name: Some(juror.name.clone()),
                    cpf: Some(juror.cpf.value().to_string()),
                    status: if store_errors.is_empty() {
                        RosterRowStatus::Valid
                    } else {
                        RosterRowStatus::Invalid
                    },
                    errors: store_errors,
                };
                if row.status == RosterRowStatus::Valid {
                    seen_cpfs.insert(juror.cpf.value().to_string());
                    valid_jurors.push(juror);
                }
                rows.push(row);
            }
            Err(errors) => rows.push(RosterRowResult {
                row_number,
                name: None,
                cpf: None,
                status: RosterRowStatus::Invalid,
                errors,
            }),
        }
    }

    let total_rows = rows.len();
    let valid_count = rows
        .iter()
        .filter(|r| r.status == RosterRowStatus::Valid)
        .count();
    let preview = RosterPreview {
        rows,
        total_rows,
        valid_count,
        invalid_count: total_rows - valid_count,
    };

    Ok((preview, valid_jurors))
}

/// Imports a roster, all rows or none.
///
/// # Errors
///
/// Returns `RosterError::InvalidRows` (with the preview attached to no
/// writes) when any row fails validation; otherwise registers every row
/// in one transaction.
pub fn import_roster(
    persistence: &mut Persistence,
    clock: &impl Clock,
    csv_content: &str,
) -> Result<RosterImportResult, ApiError> {
    let (preview, valid_jurors) = preview_roster(persistence, csv_content)?;

    if preview.invalid_count > 0 {
        return Err(RosterError::InvalidRows {
            invalid_count: preview.invalid_count,
            total_rows: preview.total_rows,
        }
        .into());
    }

    let juror_ids = persistence.register_jurors(&valid_jurors, clock.current_year())?;
    info!("Imported {} jurors from roster", juror_ids.len());
    Ok(RosterImportResult { juror_ids })
}
