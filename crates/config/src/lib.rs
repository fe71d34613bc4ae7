//! Configuration management for CAF workers.
//!
//! This crate resolves the runtime configuration of a queue-consuming worker
//! from environment variables, falling back to computed defaults.

pub mod constants;
mod loader;
pub mod source;
pub mod types;

pub use loader::{
    ConfigError, EnvSource, ProcessEnv, WorkerConfigurationBuilder, env_var_or_none, resolve,
    resolve_from_process_env,
};
pub use source::{CodeConfigurationSource, ConfigurationSource};
pub use types::{WorkerConfiguration, WorkerIdentity};
