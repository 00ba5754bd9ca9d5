//! Server host: the shared state behind every route
//!
//! The host is transport-agnostic; the REST routes and the WebSocket feed
//! both read from it.

use crate::config::AppConfig;
use crate::core::events::EventBus;
use crate::core::service::{ContactStore, SettingsStore, VehicleStore};
use std::sync::Arc;

/// Application state shared by all handlers
pub struct ServerHost {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Vehicle table
    pub vehicles: Arc<dyn VehicleStore>,

    /// Contact table
    pub contacts: Arc<dyn ContactStore>,

    /// Settings singleton
    pub settings: Arc<dyn SettingsStore>,

    /// Optional change bus feeding the WebSocket endpoint
    ///
    /// Without a bus the feed endpoint still accepts connections but closes
    /// them immediately; the stores simply mutate silently.
    pub event_bus: Option<Arc<EventBus>>,
}

impl ServerHost {
    /// Get a reference to the event bus (if configured)
    pub fn event_bus(&self) -> Option<&Arc<EventBus>> {
        self.event_bus.as_ref()
    }
}
