//! Core module containing the cross-cutting types of the service

pub mod error;
pub mod events;
pub mod format;
pub mod query;
pub mod service;
pub mod validation;

pub use error::{
    ConfigError, ContactError, SettingsError, StorageError, ValidationError, VehicleError,
    VitrineError,
};
pub use events::{ChangeEvent, EventBus, EventEnvelope, Table};
pub use query::{ListParams, PaginatedResponse, PaginationMeta};
pub use service::{ContactStore, SettingsStore, VehicleStore};
pub use validation::Format;
