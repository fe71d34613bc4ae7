//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration errors to the configuration exit code.
//!
//! Invariants:
//! - Configuration problems always exit with 2 so deployment scripts can
//!   tell a bad environment apart from a crashed tool.

use caf_worker_config::ConfigError;

/// Structured exit codes for caf-worker-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration resolved.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - malformed or out-of-range environment values,
    /// or an identity that was never substituted.
    ConfigurationError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for mapping errors to exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self.chain().any(|cause| cause.is::<ConfigError>()) {
            ExitCode::ConfigurationError
        } else {
            ExitCode::GeneralError
        }
    }
}
