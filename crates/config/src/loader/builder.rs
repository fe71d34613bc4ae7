//! Worker configuration builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `WorkerConfigurationBuilder` that layers explicit
//!   values and environment variables.
//! - Apply the output queue fallback chain and the thread default.
//! - Validate and build the final `WorkerConfiguration`.
//!
//! Does NOT handle:
//! - Reading or filtering individual env vars (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: `from_env()` overrides values set before it, and
//!   `with_*` calls after `from_env()` override the environment.
//! - Empty environment values never override anything.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use super::env::{EnvSource, env_var_or_none, parse_env_number};
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_QUEUE_NAME, DEFAULT_THREADS, ENV_BASE_QUEUE_NAME, ENV_DOTENV_DISABLED,
    ENV_FAILURE_QUEUE, ENV_MAX_BATCH_SIZE, ENV_MAX_BATCH_TIME, ENV_OUTPUT_QUEUE, ENV_THREADS,
    ENV_WORKER_NAME, OUTPUT_QUEUE_SUFFIX,
};
use crate::types::{WorkerConfiguration, WorkerIdentity};

/// Builds a `WorkerConfiguration` from explicit values and environment variables.
#[derive(Debug, Clone)]
pub struct WorkerConfigurationBuilder {
    identity: WorkerIdentity,
    output_queue: Option<String>,
    base_queue_name: Option<String>,
    deployment_name: Option<String>,
    failure_queue: Option<String>,
    threads: Option<u32>,
    max_batch_size: Option<u32>,
    max_batch_time: Option<u64>,
}

impl WorkerConfigurationBuilder {
    /// Create a builder for the given worker identity.
    pub fn new(identity: WorkerIdentity) -> Self {
        Self {
            identity,
            output_queue: None,
            base_queue_name: None,
            deployment_name: None,
            failure_queue: None,
            threads: None,
            max_batch_size: None,
            max_batch_time: None,
        }
    }

    /// Fill in fixed values suitable for exercising a worker in tests.
    pub fn with_defaults(self) -> Self {
        self.with_threads(DEFAULT_THREADS)
            .with_output_queue("output-queue")
            .with_max_batch_size(1)
            .with_max_batch_time(1)
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("Skipping .env loading because {} is set", ENV_DOTENV_DISABLED);
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from an environment snapshot.
    ///
    /// Set variables override values configured earlier on the builder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumericValue` if a numeric variable does not parse.
    pub fn from_env<E: EnvSource + ?Sized>(mut self, env: &E) -> Result<Self, ConfigError> {
        if let Some(queue) = env_var_or_none(env, ENV_OUTPUT_QUEUE) {
            self.output_queue = Some(queue);
        }
        if let Some(base) = env_var_or_none(env, ENV_BASE_QUEUE_NAME) {
            self.base_queue_name = Some(base);
        }
        if let Some(name) = env_var_or_none(env, ENV_WORKER_NAME) {
            self.deployment_name = Some(name);
        }
        if let Some(queue) = env_var_or_none(env, ENV_FAILURE_QUEUE) {
            self.failure_queue = Some(queue);
        }
        if let Some(threads) = parse_env_number(env, ENV_THREADS)? {
            self.threads = Some(threads);
        }
        if let Some(size) = parse_env_number(env, ENV_MAX_BATCH_SIZE)? {
            self.max_batch_size = Some(size);
        }
        if let Some(time) = parse_env_number(env, ENV_MAX_BATCH_TIME)? {
            self.max_batch_time = Some(time);
        }
        Ok(self)
    }

    /// Set the output queue, bypassing the base-name fallback.
    pub fn with_output_queue(mut self, queue: impl Into<String>) -> Self {
        self.output_queue = Some(queue.into());
        self
    }

    /// Set the base name the output queue is derived from.
    pub fn with_base_queue_name(mut self, base: impl Into<String>) -> Self {
        self.base_queue_name = Some(base.into());
        self
    }

    /// Set the failure queue.
    pub fn with_failure_queue(mut self, queue: impl Into<String>) -> Self {
        self.failure_queue = Some(queue.into());
        self
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the maximum batch size.
    pub fn with_max_batch_size(mut self, size: u32) -> Self {
        self.max_batch_size = Some(size);
        self
    }

    /// Set the maximum batch time in milliseconds.
    pub fn with_max_batch_time(mut self, millis: u64) -> Self {
        self.max_batch_time = Some(millis);
        self
    }

    fn resolve_output_queue(&mut self) -> String {
        if let Some(queue) = self.output_queue.take() {
            tracing::debug!(output_queue = %queue, "Using explicit output queue");
            return queue;
        }

        let (base, source) = match (self.base_queue_name.take(), self.deployment_name.take()) {
            (Some(base), _) => (base, ENV_BASE_QUEUE_NAME),
            (None, Some(name)) => (name, ENV_WORKER_NAME),
            (None, None) => (DEFAULT_BASE_QUEUE_NAME.to_string(), "default"),
        };
        let queue = format!("{base}{OUTPUT_QUEUE_SUFFIX}");
        tracing::debug!(output_queue = %queue, source, "Derived output queue from base name");
        queue
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidThreads` if the thread count is outside 1..=20,
    /// or `ConfigError::EmptyOutputQueue` if an empty output queue was set explicitly.
    pub fn build(mut self) -> Result<WorkerConfiguration, ConfigError> {
        let output_queue = self.resolve_output_queue();
        if self.failure_queue.is_none() {
            tracing::debug!("No failure queue configured");
        }

        let config = WorkerConfiguration {
            worker_name: self.identity.name().to_string(),
            worker_version: self.identity.version().to_string(),
            output_queue,
            failure_queue: self.failure_queue,
            threads: self.threads.unwrap_or(DEFAULT_THREADS),
            max_batch_size: self.max_batch_size,
            max_batch_time: self.max_batch_time,
        };
        config.validate()?;
        Ok(config)
    }
}
