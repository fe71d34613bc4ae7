//! Configuration type definitions for CAF workers.
//!
//! Responsibilities:
//! - Define the resolved `WorkerConfiguration` record consumed by the worker runtime.
//! - Define the generation-time `WorkerIdentity` (name and version).
//!
//! Does NOT handle:
//! - Resolving values from environment variables (see `loader` module).
//!
//! Invariants:
//! - Serialized field names match the worker configuration object (`workerName`, `outputQueue`, ...).
//! - Absent optional fields are omitted when serialized, never written as `null` or `0`.
//! - Deserialization applies the same validation as construction.

mod identity;
mod worker;

pub use identity::WorkerIdentity;
pub use worker::WorkerConfiguration;
