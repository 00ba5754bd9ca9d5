//! ServerBuilder for a fluent API to assemble the HTTP server
//!
//! # Example
//!
//! ```ignore
//! let app = ServerBuilder::new()
//!     .with_config(AppConfig::default())
//!     .with_vehicle_store(InMemoryVehicleStore::new())
//!     .with_contact_store(InMemoryContactStore::new())
//!     .with_settings_store(InMemorySettingsStore::default())
//!     .build()?;
//! ```

use super::host::ServerHost;
use super::routes;
use crate::config::AppConfig;
use crate::core::events::EventBus;
use crate::core::service::{ContactStore, SettingsStore, VehicleStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;

/// Builder for the storefront/back-office server
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<AppConfig>,
    vehicles: Option<Arc<dyn VehicleStore>>,
    contacts: Option<Arc<dyn ContactStore>>,
    settings: Option<Arc<dyn SettingsStore>>,
    event_bus: Option<EventBus>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application configuration; defaults apply when omitted
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the vehicle store (required)
    pub fn with_vehicle_store(mut self, store: impl VehicleStore + 'static) -> Self {
        self.vehicles = Some(Arc::new(store));
        self
    }

    /// Set the contact store (required)
    pub fn with_contact_store(mut self, store: impl ContactStore + 'static) -> Self {
        self.contacts = Some(Arc::new(store));
        self
    }

    /// Set the settings store (required)
    pub fn with_settings_store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.settings = Some(Arc::new(store));
        self
    }

    /// Attach the change bus the stores publish to, enabling the
    /// WebSocket feed endpoint
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        let vehicles = self
            .vehicles
            .ok_or_else(|| anyhow::anyhow!("VehicleStore is required. Call .with_vehicle_store()"))?;
        let contacts = self
            .contacts
            .ok_or_else(|| anyhow::anyhow!("ContactStore is required. Call .with_contact_store()"))?;
        let settings = self.settings.ok_or_else(|| {
            anyhow::anyhow!("SettingsStore is required. Call .with_settings_store()")
        })?;

        Ok(ServerHost {
            config: Arc::new(self.config.unwrap_or_default()),
            vehicles,
            contacts,
            settings,
            event_bus: self.event_bus.map(Arc::new),
        })
    }

    /// Build the final router with all routes and middleware attached
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Ok(routes::build_router(host))
    }
}
