//! # Vitrine
//!
//! Storefront and back-office API for a vehicle dealership.
//!
//! Persistence, auth, and file storage are delegated to the hosted backend
//! fronting this service; the crate's own surface is the catalog domain
//! and its HTTP exposure:
//!
//! - **Catalog query pipeline**: search + category filter + column sort
//!   over a snapshot of vehicle records, with an explicit, testable
//!   [`FilterState`](catalog::FilterState)
//! - **Contact triage**: storefront submissions with a read/archived
//!   workflow
//! - **Site settings**: contact channels, business hours, about text, and
//!   logo, with partial-update merges
//! - **Change feed**: every store mutation broadcast over a WebSocket
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitrine::prelude::*;
//!
//! let bus = EventBus::new(1024);
//! let app = ServerBuilder::new()
//!     .with_config(AppConfig::default())
//!     .with_vehicle_store(InMemoryVehicleStore::new().with_event_bus(bus.clone()))
//!     .with_contact_store(InMemoryContactStore::new().with_event_bus(bus.clone()))
//!     .with_settings_store(InMemorySettingsStore::default())
//!     .with_event_bus(bus)
//!     .build()?;
//! ```

pub mod catalog;
pub mod config;
pub mod contacts;
pub mod core;
pub mod server;
pub mod settings;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Catalog ===
    pub use crate::catalog::{
        ALL_CATEGORIES, CategoryFilter, FilterState, SortConfig, SortDirection, SortField,
        Vehicle, VehicleDraft, pipeline, vehicle_slug,
    };

    // === Contacts & settings ===
    pub use crate::contacts::{Contact, ContactDraft, ContactFilter, ContactSource, StatusFilter};
    pub use crate::settings::{
        BusinessHours, SettingsPatch, SiteContact, SiteContactPatch, SiteLogo, SiteSettings,
    };

    // === Core ===
    pub use crate::core::error::{ValidationError, VehicleError, VitrineError};
    pub use crate::core::events::{ChangeEvent, EventBus, EventEnvelope, Table};
    pub use crate::core::query::{ListParams, PaginatedResponse, PaginationMeta};
    pub use crate::core::service::{ContactStore, SettingsStore, VehicleStore};

    // === Storage ===
    pub use crate::storage::{InMemoryContactStore, InMemorySettingsStore, InMemoryVehicleStore};

    // === Config & server ===
    pub use crate::config::AppConfig;
    pub use crate::server::{ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
