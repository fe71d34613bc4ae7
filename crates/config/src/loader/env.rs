//! Environment variable lookup for configuration.
//!
//! Responsibilities:
//! - Abstract environment access behind `EnvSource` so resolution can run
//!   against an injected snapshot as well as the real process environment.
//! - Provide helper functions for reading env vars with empty-value filtering.
//! - Parse numeric variables into typed values.
//!
//! Does NOT handle:
//! - Fallback chains or defaults (see builder.rs).
//! - .env file loading (handled by WorkerConfigurationBuilder::load_dotenv).
//!
//! Invariants:
//! - Only the empty string is treated as unset; any other value, including
//!   whitespace, is returned exactly as set.
//! - Numeric values are trimmed before parsing; the error keeps the raw value.
//! - Invalid numeric values return ConfigError::InvalidNumericValue.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use super::error::ConfigError;

/// Read-only key/value view of an environment.
pub trait EnvSource {
    /// Raw value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.as_ref().to_string())
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).map(|v| v.as_ref().to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Read an environment variable, returning None if unset or empty.
/// Any other value is returned untouched, surrounding whitespace included.
pub fn env_var_or_none<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.get(key).filter(|s| !s.is_empty())
}

/// Read and parse a numeric environment variable.
///
/// Unset and empty values yield `Ok(None)`. Surrounding whitespace is ignored
/// when parsing, so a whitespace-only value is invalid rather than unset.
pub(crate) fn parse_env_number<E, T>(env: &E, key: &str) -> Result<Option<T>, ConfigError>
where
    E: EnvSource + ?Sized,
    T: FromStr,
{
    env_var_or_none(env, key)
        .map(|raw| {
            raw.trim().parse().map_err(|_| ConfigError::InvalidNumericValue {
                var: key.to_string(),
                value: raw,
            })
        })
        .transpose()
}
