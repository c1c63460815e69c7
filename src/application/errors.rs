use crate::core::ports::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("event not found: {0}")]
    NotFound(u64),

    #[error("title is required")]
    TitleMissing,

    #[error(transparent)]
    Store(EventStoreError),
}

impl From<EventStoreError> for ApplicationError {
    fn from(err: EventStoreError) -> Self {
        match err {
            EventStoreError::NotFound { id } => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}
