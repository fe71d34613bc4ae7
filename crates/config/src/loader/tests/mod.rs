//! Tests for the worker configuration loader.
//!
//! Responsibilities:
//! - Test the output queue fallback chain and numeric defaults.
//! - Test builder layering and validation.
//! - Test process environment and `.env` handling.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - Everything else resolves against an injected `HashMap` snapshot.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::WorkerIdentity;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

pub fn identity() -> WorkerIdentity {
    WorkerIdentity::new("lookup-worker", "1.0.0").unwrap()
}

pub fn snapshot<const N: usize>(
    vars: [(&'static str, &'static str); N],
) -> HashMap<&'static str, &'static str> {
    HashMap::from(vars)
}
