// Trait for fetching all events from the store.
//
// Purpose
// - Abstract data access so that different storage backends can implement it.

use async_trait::async_trait;

use crate::core::event::Event;

#[async_trait]
pub trait EventQueries {
    async fn list_events(&self) -> anyhow::Result<Vec<Event>>;
}
