use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from invoice construction, editing, and storage encoding.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FaktorError {
    /// One or more validation rules failed.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// No service with this id exists on the invoice.
    #[error("service {0} not found")]
    ServiceNotFound(u64),

    /// An amount left the range `Decimal` can represent.
    #[error("amount overflow: {0}")]
    Overflow(String),

    /// Stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Machine-readable category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field is missing or blank.
    Required,
    /// A text field is shorter than its minimum length.
    TooShort,
    /// A numeric field must be greater than zero.
    NotPositive,
    /// A percentage lies outside 0–100, or an amount is too large to total.
    OutOfRange,
    /// An identifier does not have the expected shape.
    InvalidFormat,
    /// An identifier has the right shape but a wrong check digit.
    InvalidChecksum,
    /// A collection that needs at least one entry is empty.
    Empty,
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "services.2.price").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Error category.
    pub kind: ValidationErrorKind,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        kind: ValidationErrorKind,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    pub(crate) fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, ValidationErrorKind::Required)
    }
}
