//! Store traits for the persisted tables
//!
//! Persistence is owned by the hosted backend; these traits are the seam
//! the rest of the crate programs against. The in-memory implementations in
//! [`crate::storage`] stand in for the hosted tables in tests and local
//! runs.

use crate::catalog::{Vehicle, VehicleDraft};
use crate::contacts::{Contact, ContactDraft};
use crate::settings::{SettingsPatch, SiteSettings};
use anyhow::Result;
use async_trait::async_trait;

/// Store for vehicle records
///
/// `list` returns a point-in-time snapshot ordered newest-first
/// (`created_at` descending); the query pipeline treats that order as the
/// "no explicit sort" order.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Snapshot of all vehicles, newest first
    async fn list(&self) -> Result<Vec<Vehicle>>;

    /// Get a vehicle by id
    async fn get(&self, id: i64) -> Result<Option<Vehicle>>;

    /// Create a vehicle from a validated draft; the store assigns the id
    async fn create(&self, draft: VehicleDraft) -> Result<Vehicle>;

    /// Replace a vehicle's fields from a validated draft
    ///
    /// Returns `None` when no record with that id exists.
    async fn update(&self, id: i64, draft: VehicleDraft) -> Result<Option<Vehicle>>;

    /// Delete a vehicle; returns whether a record was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Store for contact submissions
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Snapshot of all contacts, newest first
    async fn list(&self) -> Result<Vec<Contact>>;

    /// Get a contact by id
    async fn get(&self, id: i64) -> Result<Option<Contact>>;

    /// Record a new submission; the store assigns the id
    async fn create(&self, draft: ContactDraft) -> Result<Contact>;

    /// Flip the read flag; returns the updated record, `None` if missing
    async fn toggle_read(&self, id: i64) -> Result<Option<Contact>>;

    /// Flip the archived flag; returns the updated record, `None` if missing
    async fn toggle_archived(&self, id: i64) -> Result<Option<Contact>>;

    /// Delete a contact; returns whether a record was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Store for the site settings singleton
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current settings
    async fn get(&self) -> Result<SiteSettings>;

    /// Merge a partial update into the settings and return the result
    async fn update(&self, patch: SettingsPatch) -> Result<SiteSettings>;
}
