//! Core error types for the Beamglass UI core.
//!
//! This module defines toolkit-agnostic error types. Shell-specific failures
//! (settings store, platform URL opener) are converted to these types by the
//! GUI shell's trait implementations.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the UI core.
///
/// Display-rate "errors" are not represented here: the rate calculator
/// reports them as data on [`crate::fx::RateResult`], never as `Err`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings operation failed: {0}")]
    Settings(#[from] SettingsError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Failed to open external link: {0}")]
    LinkOpenFailed(String),
}

/// Errors surfaced by the shell's settings store.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The requested setting key has no stored value.
    #[error("Setting '{0}' not found")]
    NotFound(String),

    /// The store itself failed (I/O, corruption).
    #[error("Settings store failure: {0}")]
    StoreFailed(String),
}

/// Validation errors for user input parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
