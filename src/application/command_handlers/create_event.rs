// Creation command handler orchestrates the write flow.
//
// Responsibilities
// - Reject bodies without a title.
// - Ask the store to assign an id and append the new event.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::event::Event;
use crate::core::ports::EventStore;

#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: Option<String>,
}

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(store: Arc<TEventStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let title = command.title.ok_or(ApplicationError::TitleMissing)?;
        let event = self.store.insert(title).await?;
        Ok(event)
    }
}
