//! Startup resolution of the worker configuration.
//!
//! Responsibilities:
//! - Produce a `WorkerConfiguration` from a worker identity and an environment snapshot.
//!
//! Does NOT handle:
//! - `.env` loading; call `WorkerConfigurationBuilder::load_dotenv()` first if needed.
//!
//! Invariants:
//! - `resolve` reads only the supplied environment, so equal snapshots give equal records.

use super::builder::WorkerConfigurationBuilder;
use super::env::{EnvSource, ProcessEnv};
use super::error::ConfigError;
use crate::types::{WorkerConfiguration, WorkerIdentity};

/// Resolve the worker configuration against an environment snapshot.
///
/// # Errors
///
/// Fails with `ConfigError::InvalidNumericValue` or `ConfigError::InvalidThreads`
/// when a numeric variable is malformed or out of range.
pub fn resolve<E: EnvSource + ?Sized>(
    identity: &WorkerIdentity,
    env: &E,
) -> Result<WorkerConfiguration, ConfigError> {
    let config = WorkerConfigurationBuilder::new(identity.clone())
        .from_env(env)?
        .build()?;
    tracing::debug!(
        worker_name = %config.worker_name,
        output_queue = %config.output_queue,
        threads = config.threads,
        "Resolved worker configuration"
    );
    Ok(config)
}

/// Resolve the worker configuration against the current process environment.
pub fn resolve_from_process_env(
    identity: &WorkerIdentity,
) -> Result<WorkerConfiguration, ConfigError> {
    resolve(identity, &ProcessEnv)
}
