// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe abstract input and output capabilities as traits.
//
// Responsibilities
// - Keep the core independent of any storage backend by coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::event::Event;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event not found: {id}")]
    NotFound { id: u64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find(&self, event_id: u64) -> Result<Option<Event>, EventStoreError>;
    async fn insert(&self, title: String) -> Result<Event, EventStoreError>;
    async fn update_title(&self, event_id: u64, title: String) -> Result<Event, EventStoreError>;
    async fn remove(&self, event_id: u64) -> Result<Event, EventStoreError>;
}
