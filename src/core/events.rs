//! Change feed for store mutations
//!
//! Every store mutation publishes a [`ChangeEvent`] on the [`EventBus`],
//! which uses `tokio::sync::broadcast` to decouple writers (REST handlers)
//! from readers (the WebSocket feed).
//!
//! # Architecture
//!
//! ```text
//! vehicle store ──┐
//! contact store ──┼──▶ EventBus::publish() ──▶ broadcast channel ──▶ feed subscribers
//! settings store ─┘
//! ```
//!
//! Clients that keep a local snapshot of a table apply the stream of events
//! to it: `created` prepends, `updated` replaces in place, `deleted` drops.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// The table a change event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Vehicles,
    Contacts,
    Settings,
}

/// A single store mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A record was created
    Created {
        table: Table,
        id: i64,
        data: serde_json::Value,
    },
    /// A record was updated
    Updated {
        table: Table,
        id: i64,
        data: serde_json::Value,
    },
    /// A record was deleted
    Deleted { table: Table, id: i64 },
}

impl ChangeEvent {
    /// The table this event belongs to
    pub fn table(&self) -> Table {
        match self {
            ChangeEvent::Created { table, .. }
            | ChangeEvent::Updated { table, .. }
            | ChangeEvent::Deleted { table, .. } => *table,
        }
    }

    /// The id of the affected record
    pub fn record_id(&self) -> i64 {
        match self {
            ChangeEvent::Created { id, .. }
            | ChangeEvent::Updated { id, .. }
            | ChangeEvent::Deleted { id, .. } => *id,
        }
    }

    /// The action name (created, updated, deleted)
    pub fn action(&self) -> &str {
        match self {
            ChangeEvent::Created { .. } => "created",
            ChangeEvent::Updated { .. } => "updated",
            ChangeEvent::Deleted { .. } => "deleted",
        }
    }
}

/// Envelope wrapping a change event with delivery metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: ChangeEvent,
}

impl EventEnvelope {
    /// Create a new event envelope
    pub fn new(event: ChangeEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based change bus
///
/// Cheap to clone (the channel handle is reference counted) and shareable
/// across stores and handlers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity bounds how many events can be buffered before slow
    /// subscribers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Non-blocking and infallible: with no subscribers the event is simply
    /// dropped. Returns the number of receivers the event was handed to.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events
    ///
    /// Events published before this call are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
