// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the administrative status of a juror record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JurorStatus {
    /// The juror may be considered for draws.
    #[default]
    Active,
    /// The juror is excluded from draws; see [`InactivityReason`].
    Inactive,
}

impl FromStr for JurorStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidJurorStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for JurorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JurorStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Why an inactive juror is excluded from draws.
///
/// The source system stored these as free-text strings; here they form a
/// closed set, translated at the store boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InactivityReason {
    /// The juror has moved to another court district.
    NoOtherDistrict,
    /// The juror is deceased.
    Deceased,
    /// The juror is legally incapacitated.
    Incapacitated,
    /// Mandatory one-year rest after serving on a deliberation panel.
    TwelveMonthRest,
    /// A legal impediment bars the juror from service.
    Impediment,
    /// The juror is exempt from service on grounds of age.
    AgeExemption,
    /// Suspension with an end date; expires via the reactivation sweep.
    TemporarySuspension,
}

impl InactivityReason {
    /// Parses an inactivity reason from its stored string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known reason.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "NoOtherDistrict" => Ok(Self::NoOtherDistrict),
            "Deceased" => Ok(Self::Deceased),
            "Incapacitated" => Ok(Self::Incapacitated),
            "TwelveMonthRest" => Ok(Self::TwelveMonthRest),
            "Impediment" => Ok(Self::Impediment),
            "AgeExemption" => Ok(Self::AgeExemption),
            "TemporarySuspension" => Ok(Self::TemporarySuspension),
            _ => Err(DomainError::InvalidInactivityReason(s.to_string())),
        }
    }

    /// Converts this reason to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoOtherDistrict => "NoOtherDistrict",
            Self::Deceased => "Deceased",
            Self::Incapacitated => "Incapacitated",
            Self::TwelveMonthRest => "TwelveMonthRest",
            Self::Impediment => "Impediment",
            Self::AgeExemption => "AgeExemption",
            Self::TemporarySuspension => "TemporarySuspension",
        }
    }

    /// Returns whether this reason is a permanent exclusion.
    ///
    /// Permanent reasons are never overwritten by the automatic
    /// twelve-month-rest normalization.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::NoOtherDistrict
                | Self::Deceased
                | Self::Incapacitated
                | Self::Impediment
                | Self::AgeExemption
        )
    }
}

impl std::fmt::Display for InactivityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated national tax identifier (CPF).
///
/// The value is normalized to its eleven digits; formatting punctuation is
/// stripped on construction. A CPF is never reused across juror records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf {
    /// The normalized eleven-digit value.
    value: String,
}

impl Cpf {
    /// Creates a new `Cpf`, validating structure and check digits.
    ///
    /// Accepts the formatted form (`000.000.000-00`) or bare digits.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCpf` if the value does not have eleven
    /// digits, is a repeated single digit, or fails the check-digit
    /// verification.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let digits: Vec<u32> = value
            .chars()
            .filter(char::is_ascii_digit)
            .filter_map(|c| c.to_digit(10))
            .collect();

        if digits.len() != 11 {
            return Err(DomainError::InvalidCpf(format!(
                "expected 11 digits, found {}",
                digits.len()
            )));
        }
        if digits.iter().all(|d| *d == digits[0]) {
            return Err(DomainError::InvalidCpf(String::from(
                "repeated single digit",
            )));
        }
        if check_digit(&digits[..9], 10) != digits[9] || check_digit(&digits[..10], 11) != digits[10]
        {
            return Err(DomainError::InvalidCpf(String::from(
                "check digits do not match",
            )));
        }

        let normalized: String = digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect();
        Ok(Self { value: normalized })
    }

    /// Reconstructs a `Cpf` from an already-normalized stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a valid CPF. A failure
    /// here indicates a corrupted record, not bad user input.
    pub fn from_stored(value: &str) -> Result<Self, DomainError> {
        Self::new(value)
    }

    /// Returns the normalized eleven-digit value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Computes a CPF check digit over a digit prefix.
///
/// `start_weight` is 10 for the first check digit and 11 for the second.
fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let idx = u32::try_from(i).unwrap_or(0);
            d * (start_weight - idx)
        })
        .sum();
    (sum * 10) % 11 % 10
}

/// A citizen registered for jury duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Juror {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the juror has not been persisted yet.
    pub juror_id: Option<i64>,
    /// The juror's national tax identifier (unique, never reused).
    pub cpf: Cpf,
    /// The juror's full name.
    pub name: String,
    /// Birth date (`YYYY-MM-DD`), if known. Missing data never disqualifies.
    pub birth_date: Option<String>,
    /// The juror's administrative status.
    pub status: JurorStatus,
    /// Why the juror is inactive. Non-null only when `status` is `Inactive`.
    pub reason: Option<InactivityReason>,
    /// Suspension end date (`YYYY-MM-DD`). Non-null only when `reason` is
    /// `TemporarySuspension`.
    pub suspended_until: Option<String>,
    /// Date of the most recent sitting on which this juror actually served.
    pub last_service_date: Option<String>,
    /// Optional reference to a sponsoring institution.
    pub institution_id: Option<i64>,
}

impl Juror {
    /// Creates a new active `Juror` without a persisted id.
    #[must_use]
    pub const fn new(cpf: Cpf, name: String, birth_date: Option<String>) -> Self {
        Self {
            juror_id: None,
            cpf,
            name,
            birth_date,
            status: JurorStatus::Active,
            reason: None,
            suspended_until: None,
            last_service_date: None,
            institution_id: None,
        }
    }
}

/// Represents the administrative status of a judge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JudgeStatus {
    /// The judge may preside over sittings.
    #[default]
    Active,
    /// The judge is not currently presiding.
    Inactive,
}

impl FromStr for JudgeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidJudgeStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for JudgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JudgeStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A presiding judge of the district.
///
/// Invariant: across all judges, exactly one active judge carries the
/// titular flag whenever at least one judge exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    /// Canonical identifier assigned by the database.
    pub judge_id: Option<i64>,
    /// The judge's name.
    pub name: String,
    /// Whether this judge is the district's titular judge of record.
    pub is_titular: bool,
    /// The judge's administrative status.
    pub status: JudgeStatus,
}

impl Judge {
    /// Creates a new `Judge` without a persisted id.
    #[must_use]
    pub const fn new(name: String, is_titular: bool, status: JudgeStatus) -> Self {
        Self {
            judge_id: None,
            name,
            is_titular,
            status,
        }
    }

    /// Returns whether this judge counts toward the titular invariant.
    #[must_use]
    pub const fn is_active_titular(&self) -> bool {
        self.is_titular && matches!(self.status, JudgeStatus::Active)
    }
}

/// The lifecycle state of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrawStatus {
    /// The draw is being configured; assignments and ballots may change.
    #[default]
    Scheduled,
    /// The sitting has taken place.
    Held,
    /// The draw was cancelled; assignments and ballots are frozen.
    Cancelled,
}

impl FromStr for DrawStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Held" => Ok(Self::Held),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidDrawStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DrawStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DrawStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Held => "Held",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// One jury-selection event for a reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Canonical identifier assigned by the database.
    pub draw_id: Option<i64>,
    /// The jury-duty year this draw is organized for.
    pub reference_year: u16,
    /// The date the draw itself is performed (`YYYY-MM-DD`).
    pub draw_date: String,
    /// The date of the sitting (`YYYY-MM-DD`). Feeds `last_service_date`.
    pub sitting_date: String,
    /// The wall-clock time of the sitting (`HH:MM`), if scheduled.
    pub sitting_time: Option<String>,
    /// The responsible judge, if assigned.
    pub judge_id: Option<i64>,
    /// The draw's lifecycle state.
    pub status: DrawStatus,
}

impl Draw {
    /// Creates a new scheduled `Draw` without a persisted id.
    #[must_use]
    pub const fn new(
        reference_year: u16,
        draw_date: String,
        sitting_date: String,
        sitting_time: Option<String>,
        judge_id: Option<i64>,
    ) -> Self {
        Self {
            draw_id: None,
            reference_year,
            draw_date,
            sitting_date,
            sitting_time,
            judge_id,
            status: DrawStatus::Scheduled,
        }
    }

    /// Returns whether assignments and ballots may still be modified.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !matches!(self.status, DrawStatus::Cancelled)
    }
}

/// The role a juror holds within a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentRole {
    /// A primary member of the jury.
    Titular,
    /// An alternate, called on if a titular is unavailable.
    Suplente,
}

impl AssignmentRole {
    /// Parses an assignment role from its stored string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Titular" => Ok(Self::Titular),
            "Suplente" => Ok(Self::Suplente),
            _ => Err(DomainError::InvalidAssignmentRole(s.to_string())),
        }
    }

    /// Converts this role to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Titular => "Titular",
            Self::Suplente => "Suplente",
        }
    }

    /// Returns the opposite role.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Titular => Self::Suplente,
            Self::Suplente => Self::Titular,
        }
    }
}

impl std::fmt::Display for AssignmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (draw, juror) pair with a role.
///
/// A given juror appears at most once per draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawAssignment {
    /// Canonical identifier assigned by the database.
    pub assignment_id: Option<i64>,
    /// The draw this assignment belongs to.
    pub draw_id: i64,
    /// The assigned juror.
    pub juror_id: i64,
    /// The juror's role in this draw.
    pub role: AssignmentRole,
}

/// The printable state of a ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BallotStatus {
    /// Created by a numbering pass; not yet printed.
    #[default]
    Generated,
    /// Printed for the sitting.
    Printed,
    /// Drawn from the urn during the sitting.
    Used,
}

impl BallotStatus {
    /// Parses a ballot status from its stored string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Generated" => Ok(Self::Generated),
            "Printed" => Ok(Self::Printed),
            "Used" => Ok(Self::Used),
            _ => Err(DomainError::InvalidBallotStatus(s.to_string())),
        }
    }

    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::Printed => "Printed",
            Self::Used => "Used",
        }
    }
}

impl std::fmt::Display for BallotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A uniquely numbered printable artifact for one drawn juror in one draw.
///
/// Sequence numbers start at 1 and are gap-free within a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    /// Canonical identifier assigned by the database.
    pub ballot_id: Option<i64>,
    /// The draw this ballot belongs to.
    pub draw_id: i64,
    /// The juror this ballot identifies.
    pub juror_id: i64,
    /// The ballot's sequence number within the draw (1-based, gap-free).
    pub sequence: u32,
    /// The ballot's printable state.
    pub status: BallotStatus,
}
