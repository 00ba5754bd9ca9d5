//! In-memory store implementations for testing and local development
//!
//! These stand in for the hosted backend's tables. Each store keeps its
//! records behind an `RwLock`, assigns ids from a shared counter, and
//! publishes a change event for every mutation when given an
//! [`EventBus`].

use crate::catalog::{Vehicle, VehicleDraft};
use crate::contacts::{Contact, ContactDraft};
use crate::core::events::{ChangeEvent, EventBus, Table};
use crate::core::service::{ContactStore, SettingsStore, VehicleStore};
use crate::settings::{SettingsPatch, SiteSettings};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// The settings singleton uses a fixed record id in the change feed
const SETTINGS_RECORD_ID: i64 = 1;

fn publish(bus: &Option<EventBus>, event: ChangeEvent) {
    if let Some(bus) = bus {
        bus.publish(event);
    }
}

fn created_event<T: serde::Serialize>(table: Table, id: i64, record: &T) -> ChangeEvent {
    ChangeEvent::Created {
        table,
        id,
        data: serde_json::to_value(record).unwrap_or_default(),
    }
}

fn updated_event<T: serde::Serialize>(table: Table, id: i64, record: &T) -> ChangeEvent {
    ChangeEvent::Updated {
        table,
        id,
        data: serde_json::to_value(record).unwrap_or_default(),
    }
}

/// In-memory vehicle store
#[derive(Clone)]
pub struct InMemoryVehicleStore {
    rows: Arc<RwLock<HashMap<i64, Vehicle>>>,
    next_id: Arc<AtomicI64>,
    bus: Option<EventBus>,
}

impl InMemoryVehicleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            bus: None,
        }
    }

    /// Publish change events for every mutation on the given bus
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }
}

impl Default for InMemoryVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn list(&self) -> Result<Vec<Vehicle>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {e}"))?;

        let mut all: Vec<Vehicle> = rows.values().cloned().collect();
        // newest first; id breaks created_at ties deterministically
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn get(&self, id: i64) -> Result<Option<Vehicle>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {e}"))?;

        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, draft: VehicleDraft) -> Result<Vehicle> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let vehicle = draft.into_record(id, now, now);

        {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;
            rows.insert(id, vehicle.clone());
        }

        publish(&self.bus, created_event(Table::Vehicles, id, &vehicle));
        Ok(vehicle)
    }

    async fn update(&self, id: i64, draft: VehicleDraft) -> Result<Option<Vehicle>> {
        let updated = {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;

            match rows.get(&id) {
                Some(existing) => {
                    let vehicle = draft.into_record(id, existing.created_at, Utc::now());
                    rows.insert(id, vehicle.clone());
                    Some(vehicle)
                }
                None => None,
            }
        };

        if let Some(vehicle) = &updated {
            publish(&self.bus, updated_event(Table::Vehicles, id, vehicle));
        }
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let removed = {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;
            rows.remove(&id).is_some()
        };

        if removed {
            publish(&self.bus, ChangeEvent::Deleted { table: Table::Vehicles, id });
        }
        Ok(removed)
    }
}

/// In-memory contact store
#[derive(Clone)]
pub struct InMemoryContactStore {
    rows: Arc<RwLock<HashMap<i64, Contact>>>,
    next_id: Arc<AtomicI64>,
    bus: Option<EventBus>,
}

impl InMemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            bus: None,
        }
    }

    /// Publish change events for every mutation on the given bus
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    fn toggle<F>(&self, id: i64, flip: F) -> Result<Option<Contact>>
    where
        F: FnOnce(&mut Contact),
    {
        let updated = {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;

            rows.get_mut(&id).map(|contact| {
                flip(contact);
                contact.clone()
            })
        };

        if let Some(contact) = &updated {
            publish(&self.bus, updated_event(Table::Contacts, id, contact));
        }
        Ok(updated)
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self) -> Result<Vec<Contact>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {e}"))?;

        let mut all: Vec<Contact> = rows.values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {e}"))?;

        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, draft: ContactDraft) -> Result<Contact> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let contact = draft.into_record(id, Utc::now());

        {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;
            rows.insert(id, contact.clone());
        }

        publish(&self.bus, created_event(Table::Contacts, id, &contact));
        Ok(contact)
    }

    async fn toggle_read(&self, id: i64) -> Result<Option<Contact>> {
        self.toggle(id, |contact| contact.is_read = !contact.is_read)
    }

    async fn toggle_archived(&self, id: i64) -> Result<Option<Contact>> {
        self.toggle(id, |contact| contact.is_archived = !contact.is_archived)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let removed = {
            let mut rows = self
                .rows
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;
            rows.remove(&id).is_some()
        };

        if removed {
            publish(&self.bus, ChangeEvent::Deleted { table: Table::Contacts, id });
        }
        Ok(removed)
    }
}

/// In-memory settings store holding the singleton record
#[derive(Clone)]
pub struct InMemorySettingsStore {
    settings: Arc<RwLock<SiteSettings>>,
    bus: Option<EventBus>,
}

impl InMemorySettingsStore {
    /// Create a store seeded with the given settings
    pub fn new(seed: SiteSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(seed)),
            bus: None,
        }
    }

    /// Publish change events for every mutation on the given bus
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new(SiteSettings::default())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self) -> Result<SiteSettings> {
        let settings = self
            .settings
            .read()
            .map_err(|e| anyhow!("failed to acquire read lock: {e}"))?;

        Ok(settings.clone())
    }

    async fn update(&self, patch: SettingsPatch) -> Result<SiteSettings> {
        let updated = {
            let mut settings = self
                .settings
                .write()
                .map_err(|e| anyhow!("failed to acquire write lock: {e}"))?;

            settings.apply(patch, Utc::now());
            settings.clone()
        };

        publish(
            &self.bus,
            updated_event(Table::Settings, SETTINGS_RECORD_ID, &updated),
        );
        Ok(updated)
    }
}
