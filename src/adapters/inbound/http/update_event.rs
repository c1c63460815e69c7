use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use crate::adapters::inbound::http::error::{EVENT_NOT_FOUND, TITLE_REQUIRED, error_response};
use crate::application::command_handlers::update_event::UpdateEventTitle;
use crate::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(event_id): Path<u64>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let command = UpdateEventTitle {
        event_id,
        title: title_field(body),
    };

    match state.update_handler.handle(command).await {
        Ok(event) => Json(event).into_response(),
        Err(ApplicationError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, EVENT_NOT_FOUND)
        }
        Err(ApplicationError::TitleMissing) => {
            error_response(StatusCode::BAD_REQUEST, TITLE_REQUIRED)
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn title_field(body: Result<Json<Value>, JsonRejection>) -> Option<String> {
    let Ok(Json(value)) = body else { return None };
    value.get("title")?.as_str().map(ToOwned::to_owned)
}
