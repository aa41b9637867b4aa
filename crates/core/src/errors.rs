//! Core error types for the Worthwatch valuation engine.
//!
//! This module defines storage-agnostic error types. The engine never talks
//! to a database or the network; everything here is a deterministic,
//! local validation or computation failure.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Deterministic validation failures detected before computation begins.
///
/// None of these are transient — the same inputs always fail the same way,
/// so nothing here is ever retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// Bad fixed-asset configuration: non-positive useful life, non-positive
    /// original value, negative salvage, or salvage >= original value.
    #[error("Invalid asset configuration: {0}")]
    InvalidAsset(String),

    /// Bad project configuration: non-positive consumption window.
    #[error("Invalid project configuration: {0}")]
    InvalidProject(String),
}

/// Recoverable conditions surfaced on a result rather than returned as `Err`.
///
/// The computation still completes (with a documented fallback); the warning
/// is carried so the caller can log or alert on it.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "detail")]
pub enum ValuationWarning {
    /// Unrecognized depreciation method string; straight line was applied.
    #[error("Unknown depreciation method '{0}', fell back to straight line")]
    UnknownMethod(String),
}

/// Validation errors for data parsing at the engine boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
