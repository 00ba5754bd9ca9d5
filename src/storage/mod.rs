//! Store implementations
//!
//! Production deployments delegate persistence to the hosted backend; the
//! in-memory stores here back tests and local runs.

pub mod in_memory;

pub use in_memory::{InMemoryContactStore, InMemorySettingsStore, InMemoryVehicleStore};
