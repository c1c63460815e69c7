// End to end test for the event CRUD flow over the assembled router.
//
// Drives the seeded store through create, update, delete, and list, and
// checks the wire-level JSON at each step.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use events_api::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

fn seeded_app() -> Router {
    let store = Arc::new(InMemoryEventStore::with_seed_events());
    router(AppState::with_store(store))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn crud_flow_over_the_seeded_store() {
    let app = seeded_app();

    // Welcome route.
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"message": "Welcome to the Event Management API"})
    );

    // Create appends with the next id.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/events", r#"{"title":"New Talk"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 3, "title": "New Talk"})
    );

    // Update replaces only that event's title.
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/events/1",
            r#"{"title":"Updated Meetup"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 1, "title": "Updated Meetup"})
    );

    // Delete removes the event and returns an empty body.
    let response = app
        .clone()
        .oneshot(Request::delete("/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // Listing reflects the net effect, in insertion order.
    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([
            {"id": 1, "title": "Updated Meetup"},
            {"id": 3, "title": "New Talk"}
        ])
    );
}

#[tokio::test]
async fn create_reuses_the_highest_id_after_a_deletion() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(Request::delete("/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/events", r#"{"title":"Replacement"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 2, "title": "Replacement"})
    );
}

#[tokio::test]
async fn update_of_an_unknown_id_is_not_found() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/events/99", r#"{"title":"X"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Event not found"})
    );
}

#[tokio::test]
async fn create_without_a_title_is_rejected_and_does_not_append() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/events", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Title is required"})
    );

    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_of_an_unknown_id_is_not_found_and_leaves_the_store_alone() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(Request::delete("/events/99").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Event not found"})
    );

    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}
