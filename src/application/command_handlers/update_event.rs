// Title update command handler.
//
// Responsibilities
// - Report unknown ids before looking at the body: the lookup runs first,
//   then the title check, then the mutation.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::event::Event;
use crate::core::ports::EventStore;

#[derive(Debug, Clone)]
pub struct UpdateEventTitle {
    pub event_id: u64,
    pub title: Option<String>,
}

pub struct UpdateEventTitleHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    store: Arc<TEventStore>,
}

impl<TEventStore> UpdateEventTitleHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(store: Arc<TEventStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateEventTitle) -> Result<Event, ApplicationError> {
        if self.store.find(command.event_id).await?.is_none() {
            return Err(ApplicationError::NotFound(command.event_id));
        }
        let title = command.title.ok_or(ApplicationError::TitleMissing)?;
        let event = self.store.update_title(command.event_id, title).await?;
        Ok(event)
    }
}
