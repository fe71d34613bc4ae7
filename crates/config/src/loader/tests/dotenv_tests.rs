//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` to prevent cross-test contamination.
//! - Tests must serialize mutations to process-global state (cwd/env).

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::{env_lock, identity};
use crate::loader::builder::WorkerConfigurationBuilder;
use crate::loader::error::ConfigError;
use crate::loader::resolver::resolve_from_process_env;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = WorkerConfigurationBuilder::new(identity()).load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_valid_dotenv_feeds_process_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "CAF_WORKER_BASE_QUEUE_NAME=from-dotenv\n",
    )
    .unwrap();

    // Pinning the variable unset lets temp_env restore it after dotenvy sets it.
    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("CAF_WORKER_BASE_QUEUE_NAME", None),
            ("CAF_WORKER_OUTPUT_QUEUE", None),
        ],
        || {
            WorkerConfigurationBuilder::new(identity())
                .load_dotenv()
                .unwrap();
            let config = resolve_from_process_env(&identity()).unwrap();
            assert_eq!(config.output_queue, "from-dotenv-out");
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "CAF_WORKER_FAILURE_QUEUE=super-secret-queue\nINVALID_LINE_WITHOUT_EQUALS",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("CAF_WORKER_FAILURE_QUEUE", None),
        ],
        || {
            let err = WorkerConfigurationBuilder::new(identity())
                .load_dotenv()
                .unwrap_err();
            assert!(matches!(err, ConfigError::DotenvParse { .. }));
            assert!(!err.to_string().contains("super-secret-queue"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    // Would fail to parse if it were read
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            let result = WorkerConfigurationBuilder::new(identity()).load_dotenv();
            assert!(result.is_ok(), "DOTENV_DISABLED={value} should skip loading");
        });
    }
}
