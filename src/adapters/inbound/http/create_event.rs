use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use crate::adapters::inbound::http::error::{TITLE_REQUIRED, error_response};
use crate::application::command_handlers::create_event::CreateEvent;
use crate::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let command = CreateEvent {
        title: title_field(body),
    };

    match state.create_handler.handle(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(ApplicationError::TitleMissing) => {
            error_response(StatusCode::BAD_REQUEST, TITLE_REQUIRED)
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

// A missing body, malformed JSON, an absent key, and a non-string value all
// collapse to None and report as a missing title.
fn title_field(body: Result<Json<Value>, JsonRejection>) -> Option<String> {
    let Ok(Json(value)) = body else { return None };
    value.get("title")?.as_str().map(ToOwned::to_owned)
}
