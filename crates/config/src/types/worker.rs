//! The resolved worker configuration record.
//!
//! Responsibilities:
//! - Hold the queue names, thread count, and batching limits a worker runtime needs.
//! - Serialize to and from the camelCase worker configuration object.
//!
//! Does NOT handle:
//! - Resolution from environment variables (see `loader::builder`).
//! - Any queue wiring or batching itself; those belong to the worker runtime.
//!
//! Invariants:
//! - `worker_name`, `worker_version` and `output_queue` are always present.
//! - `Some(0)` and `None` are distinct for `max_batch_size` and `max_batch_time`.
//! - `WorkerConfigurationBuilder::build()` and deserialization both run `validate()`;
//!   a record assembled by hand with a struct literal is not checked until it is called.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{MAX_THREADS, MIN_THREADS};
use crate::loader::ConfigError;
use crate::types::WorkerIdentity;

/// Runtime configuration for a queue-consuming worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WorkerConfigurationRecord")]
pub struct WorkerConfiguration {
    /// Worker name fixed at generation time.
    pub worker_name: String,
    /// Worker version fixed at generation time.
    pub worker_version: String,
    /// Queue that successfully processed results are published to.
    pub output_queue: String,
    /// Queue that failed messages are published to, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_queue: Option<String>,
    /// Size of the worker pool.
    pub threads: u32,
    /// Maximum number of messages per batch, if limited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_size: Option<u32>,
    /// Maximum time to build up a batch, in milliseconds, if limited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_time: Option<u64>,
}

impl WorkerConfiguration {
    /// The batch time limit as a `Duration`.
    pub fn max_batch_time_duration(&self) -> Option<Duration> {
        self.max_batch_time.map(Duration::from_millis)
    }

    /// Check the invariants a worker runtime relies on.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingRequiredDefault` if the name or version is blank or unsubstituted.
    /// - `ConfigError::EmptyOutputQueue` if the output queue is empty.
    /// - `ConfigError::InvalidThreads` if the thread count is outside 1..=20.
    pub fn validate(&self) -> Result<(), ConfigError> {
        WorkerIdentity::new(self.worker_name.as_str(), self.worker_version.as_str())?;
        if self.output_queue.is_empty() {
            return Err(ConfigError::EmptyOutputQueue);
        }
        validate_threads(self.threads)
    }
}

fn validate_threads(threads: u32) -> Result<(), ConfigError> {
    if (MIN_THREADS..=MAX_THREADS).contains(&threads) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreads { value: threads })
    }
}

/// Unvalidated wire shape of a `WorkerConfiguration`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkerConfigurationRecord {
    worker_name: String,
    worker_version: String,
    output_queue: String,
    #[serde(default)]
    failure_queue: Option<String>,
    threads: u32,
    #[serde(default)]
    max_batch_size: Option<u32>,
    #[serde(default)]
    max_batch_time: Option<u64>,
}

impl TryFrom<WorkerConfigurationRecord> for WorkerConfiguration {
    type Error = ConfigError;

    fn try_from(record: WorkerConfigurationRecord) -> Result<Self, Self::Error> {
        let config = Self {
            worker_name: record.worker_name,
            worker_version: record.worker_version,
            output_queue: record.output_queue,
            failure_queue: record.failure_queue,
            threads: record.threads,
            max_batch_size: record.max_batch_size,
            max_batch_time: record.max_batch_time,
        };
        config.validate()?;
        Ok(config)
    }
}
