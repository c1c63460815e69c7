// In memory implementation of the EventStore port.
//
// Purpose
// - Back the service with a process-local list; there is no durable storage.
//
// Responsibilities
// - Keep events in insertion order and remove them in place.
// - Serialize access behind a single lock so every request observes a
//   consistent store state.

use tokio::sync::RwLock;

use crate::application::query_handlers::event_queries::EventQueries;
use crate::core::event::{Event, next_event_id};
use crate::core::ports::{EventStore, EventStoreError};

pub struct InMemoryEventStore {
    inner: RwLock<Vec<Event>>,
    offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            offline: false,
        }
    }

    /// Store pre-populated with the two startup events.
    pub fn with_seed_events() -> Self {
        Self {
            inner: RwLock::new(vec![
                Event {
                    id: 1,
                    title: "Tech Meetup".to_string(),
                },
                Event {
                    id: 2,
                    title: "Python Workshop".to_string(),
                },
            ]),
            offline: false,
        }
    }

    /// Test hook: make every operation fail as if the backend were gone.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn find(&self, event_id: u64) -> Result<Option<Event>, EventStoreError> {
        self.check_online()?;
        let events = self.inner.read().await;
        Ok(events.iter().find(|event| event.id == event_id).cloned())
    }

    async fn insert(&self, title: String) -> Result<Event, EventStoreError> {
        self.check_online()?;
        let mut events = self.inner.write().await;
        // Id assignment and append happen under the same write lock.
        let event = Event {
            id: next_event_id(&events),
            title,
        };
        events.push(event.clone());
        Ok(event)
    }

    async fn update_title(&self, event_id: u64, title: String) -> Result<Event, EventStoreError> {
        self.check_online()?;
        let mut events = self.inner.write().await;
        match events.iter_mut().find(|event| event.id == event_id) {
            Some(event) => {
                event.title = title;
                Ok(event.clone())
            }
            None => Err(EventStoreError::NotFound { id: event_id }),
        }
    }

    async fn remove(&self, event_id: u64) -> Result<Event, EventStoreError> {
        self.check_online()?;
        let mut events = self.inner.write().await;
        match events.iter().position(|event| event.id == event_id) {
            Some(index) => Ok(events.remove(index)),
            None => Err(EventStoreError::NotFound { id: event_id }),
        }
    }
}

#[async_trait::async_trait]
impl EventQueries for InMemoryEventStore {
    async fn list_events(&self) -> anyhow::Result<Vec<Event>> {
        self.check_online()?;
        let events = self.inner.read().await;
        Ok(events.clone())
    }
}
