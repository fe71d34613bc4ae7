//! Shared test utilities for caf-worker-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All CAF_WORKER_* variables are cleared so host values cannot leak in.

use assert_cmd::Command;

pub const WORKER_VARS: [&str; 7] = [
    "CAF_WORKER_OUTPUT_QUEUE",
    "CAF_WORKER_BASE_QUEUE_NAME",
    "CAF_WORKER_NAME",
    "CAF_WORKER_FAILURE_QUEUE",
    "CAF_WORKER_THREADS",
    "CAF_WORKER_MAX_BATCH_SIZE",
    "CAF_WORKER_MAX_BATCH_TIME",
];

/// Returns a hermetic `caf-worker-config` command for integration testing.
pub fn worker_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("caf-worker-config");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in WORKER_VARS {
        cmd.env_remove(var);
    }

    cmd
}
