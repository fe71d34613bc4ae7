//! Error types for worker configuration.
//!
//! Responsibilities:
//! - Define error variants for every configuration failure: identity, numeric parsing,
//!   range validation, `.env` loading, and configuration source lookups.
//!
//! Does NOT handle:
//! - Exit code mapping (see the CLI crate).
//!
//! Invariants:
//! - Numeric errors always carry the variable name and the raw value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Every variant is fatal at startup; nothing here is retryable.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while resolving worker configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A generation-time constant was not substituted when the worker was built.
    #[error("Missing required default for {field}: the value was not substituted at build time")]
    MissingRequiredDefault { field: &'static str },

    #[error("Invalid value for {var}: '{value}' is not a valid non-negative integer")]
    InvalidNumericValue { var: String, value: String },

    #[error("Output queue must not be empty")]
    EmptyOutputQueue,

    #[error("Invalid value for CAF_WORKER_THREADS: must be between 1 and 20 (got {value})")]
    InvalidThreads { value: u32 },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("Could not find configuration of type {0}")]
    ConfigurationNotFound(&'static str),

    #[error("Configuration for {0} already set")]
    DuplicateConfiguration(&'static str),
}
