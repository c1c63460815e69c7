use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::adapters::inbound::http::error::{EVENT_NOT_FOUND, error_response};
use crate::application::command_handlers::delete_event::DeleteEvent;
use crate::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(event_id): Path<u64>) -> impl IntoResponse {
    match state.delete_handler.handle(DeleteEvent { event_id }).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, EVENT_NOT_FOUND)
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
