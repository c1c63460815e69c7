use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

pub async fn handle() -> impl IntoResponse {
    Json(WelcomeResponse {
        message: "Welcome to the Event Management API".to_string(),
    })
}
