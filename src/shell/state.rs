use std::sync::Arc;

use crate::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
use crate::application::command_handlers::create_event::CreateEventHandler;
use crate::application::command_handlers::delete_event::DeleteEventHandler;
use crate::application::command_handlers::update_event::UpdateEventTitleHandler;
use crate::application::query_handlers::event_queries::EventQueries;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn EventQueries + Send + Sync>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub update_handler: Arc<UpdateEventTitleHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// Wire every handler onto one shared store.
    pub fn with_store(store: Arc<InMemoryEventStore>) -> Self {
        Self {
            queries: store.clone(),
            create_handler: Arc::new(CreateEventHandler::new(store.clone())),
            update_handler: Arc::new(UpdateEventTitleHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(store)),
        }
    }
}
