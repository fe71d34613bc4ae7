//! Generation-time worker identity.
//!
//! Responsibilities:
//! - Hold the worker name and version fixed when the worker project is built.
//! - Reject identities whose values are empty or still carry an unsubstituted
//!   template placeholder.
//!
//! Does NOT handle:
//! - Reading anything from the runtime environment. `CAF_WORKER_NAME` only
//!   feeds the output queue fallback (see `loader::builder`).
//!
//! Invariants:
//! - A `WorkerIdentity` always has a non-empty, substituted name and version,
//!   whether constructed with `new` or deserialized.

use serde::{Deserialize, Serialize};

use crate::loader::ConfigError;

/// Worker name and version supplied by the build, not by the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdentityRecord")]
pub struct WorkerIdentity {
    name: String,
    version: String,
}

#[derive(Deserialize)]
struct IdentityRecord {
    name: String,
    version: String,
}

impl TryFrom<IdentityRecord> for WorkerIdentity {
    type Error = ConfigError;

    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.version)
    }
}

impl WorkerIdentity {
    /// Create an identity from the two generation-time constants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequiredDefault` if either value is blank
    /// or still contains a `${...}` placeholder.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let version = version.into();
        check_substituted("workerName", &name)?;
        check_substituted("workerVersion", &version)?;
        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn check_substituted(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() || value.contains("${") {
        return Err(ConfigError::MissingRequiredDefault { field });
    }
    Ok(())
}

/// Build a [`WorkerIdentity`] from the calling crate's `Cargo.toml`.
///
/// Expands to a `Result<WorkerIdentity, ConfigError>`.
#[macro_export]
macro_rules! worker_identity {
    () => {
        $crate::WorkerIdentity::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_substituted_values() {
        let identity = WorkerIdentity::new("lookup-worker", "1.2.0").unwrap();
        assert_eq!(identity.name(), "lookup-worker");
        assert_eq!(identity.version(), "1.2.0");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = WorkerIdentity::new("  ", "1.0.0");
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredDefault { field: "workerName" })
        ));
    }

    #[test]
    fn test_new_rejects_unsubstituted_placeholders() {
        let result = WorkerIdentity::new("${workerName}", "1.0.0");
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredDefault { field: "workerName" })
        ));

        let result = WorkerIdentity::new("lookup-worker", "${project.version}");
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredDefault {
                field: "workerVersion"
            })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let identity: WorkerIdentity =
            serde_json::from_str(r#"{"name":"lookup-worker","version":"1.0.0"}"#).unwrap();
        assert_eq!(identity.name(), "lookup-worker");

        let result = serde_json::from_str::<WorkerIdentity>(
            r#"{"name":"lookup-worker","version":"${project.version}"}"#,
        );
        assert!(result.unwrap_err().to_string().contains("workerVersion"));

        assert!(serde_json::from_str::<WorkerIdentity>(r#"{"name":"","version":"1"}"#).is_err());
    }

    #[test]
    fn test_macro_uses_crate_manifest() {
        let identity = crate::worker_identity!().unwrap();
        assert_eq!(identity.name(), env!("CARGO_PKG_NAME"));
        assert_eq!(identity.version(), env!("CARGO_PKG_VERSION"));
    }
}
