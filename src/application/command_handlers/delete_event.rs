use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::event::Event;
use crate::core::ports::EventStore;

#[derive(Debug, Clone)]
pub struct DeleteEvent {
    pub event_id: u64,
}

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    store: Arc<TEventStore>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(store: Arc<TEventStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteEvent) -> Result<Event, ApplicationError> {
        let removed = self.store.remove(command.event_id).await?;
        Ok(removed)
    }
}
