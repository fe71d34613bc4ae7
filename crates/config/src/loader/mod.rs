//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Resolve the worker configuration from environment variables and defaults.
//! - Provide a builder-pattern `WorkerConfigurationBuilder` for layering explicit values.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Wiring queues or sizing worker pools; the worker runtime consumes the result.
//!
//! Invariants / Assumptions:
//! - Only empty environment variables are treated as unset; other values are kept verbatim.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod resolver;

#[cfg(test)]
mod tests;

pub use builder::WorkerConfigurationBuilder;
pub use env::{EnvSource, ProcessEnv, env_var_or_none};
pub use error::ConfigError;
pub use resolver::{resolve, resolve_from_process_env};
