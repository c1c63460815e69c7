use axum::{
    Router,
    routing::{get, patch},
};

use crate::adapters::inbound::http::create_event;
use crate::adapters::inbound::http::delete_event;
use crate::adapters::inbound::http::list_events;
use crate::adapters::inbound::http::update_event;
use crate::adapters::inbound::http::welcome;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome::handle))
        .route("/events", get(list_events::handle).post(create_event::handle))
        .route(
            "/events/{event_id}",
            patch(update_event::handle).delete(delete_event::handle),
        )
        .with_state(state)
}
