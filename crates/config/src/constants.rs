//! Centralized constants for the CAF worker configuration.
//!
//! This module contains the environment variable names and default values
//! shared by the resolver, the builder, and the CLI.

// =============================================================================
// Environment Variables
// =============================================================================

/// Explicit output queue name.
pub const ENV_OUTPUT_QUEUE: &str = "CAF_WORKER_OUTPUT_QUEUE";

/// Base name used to derive the output queue when no explicit one is set.
pub const ENV_BASE_QUEUE_NAME: &str = "CAF_WORKER_BASE_QUEUE_NAME";

/// Deployment-level worker name, second choice for the queue base name.
///
/// This does not override the generation-time worker name.
pub const ENV_WORKER_NAME: &str = "CAF_WORKER_NAME";

/// Failure queue name.
pub const ENV_FAILURE_QUEUE: &str = "CAF_WORKER_FAILURE_QUEUE";

/// Worker thread count.
pub const ENV_THREADS: &str = "CAF_WORKER_THREADS";

/// Maximum number of messages in a batch.
pub const ENV_MAX_BATCH_SIZE: &str = "CAF_WORKER_MAX_BATCH_SIZE";

/// Maximum time to build up a batch, in milliseconds.
pub const ENV_MAX_BATCH_TIME: &str = "CAF_WORKER_MAX_BATCH_TIME";

/// Set to `true` or `1` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults & Bounds
// =============================================================================

/// Queue base name used when neither base queue name nor worker name is set.
pub const DEFAULT_BASE_QUEUE_NAME: &str = "worker";

/// Suffix appended to the base name to form the output queue.
pub const OUTPUT_QUEUE_SUFFIX: &str = "-out";

/// Default number of worker threads.
pub const DEFAULT_THREADS: u32 = 1;

/// Minimum allowed number of worker threads.
pub const MIN_THREADS: u32 = 1;

/// Maximum allowed number of worker threads.
pub const MAX_THREADS: u32 = 20;
