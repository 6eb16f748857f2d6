//! Field validation rules shared by every entity constructor and setter.
//!
//! # Invariants
//! - Camper names are non-empty after trimming whitespace.
//! - Camper ages are within `[MIN_CAMPER_AGE, MAX_CAMPER_AGE]`.
//! - Signup times are hours within `[MIN_SIGNUP_HOUR, MAX_SIGNUP_HOUR]`.

use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_CAMPER_AGE: i64 = 8;
pub const MAX_CAMPER_AGE: i64 = 18;
pub const MIN_SIGNUP_HOUR: i64 = 0;
pub const MAX_SIGNUP_HOUR: i64 = 23;

/// Field-level rejection raised at the domain boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper name is empty or whitespace-only.
    BlankName,
    /// Camper age outside the accepted range.
    AgeOutOfRange(i64),
    /// Signup hour outside the accepted range.
    TimeOutOfRange(i64),
    /// Required input field was absent.
    MissingField(&'static str),
    /// Foreign reference points at a row that does not exist.
    UnknownReference { kind: EntityKind, id: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "camper name cannot be empty"),
            Self::AgeOutOfRange(age) => write!(
                f,
                "camper age must be between {MIN_CAMPER_AGE} and {MAX_CAMPER_AGE}, inclusive (got {age})"
            ),
            Self::TimeOutOfRange(time) => write!(
                f,
                "signup time must be between {MIN_SIGNUP_HOUR} and {MAX_SIGNUP_HOUR}, inclusive (got {time})"
            ),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::UnknownReference { kind, id } => write!(f, "referenced {kind} {id} does not exist"),
        }
    }
}

impl Error for ValidationError {}

/// Unwraps an optional input field or reports it as missing.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(())
}

pub fn validate_age(age: i64) -> Result<(), ValidationError> {
    if !(MIN_CAMPER_AGE..=MAX_CAMPER_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

pub fn validate_time(time: i64) -> Result<(), ValidationError> {
    if !(MIN_SIGNUP_HOUR..=MAX_SIGNUP_HOUR).contains(&time) {
        return Err(ValidationError::TimeOutOfRange(time));
    }
    Ok(())
}
