use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::adapters::in_memory::in_memory_event_store::InMemoryEventStore;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let store = Arc::new(InMemoryEventStore::with_seed_events());
    let state = AppState::with_store(store);

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = std::env::var("EVENTS_API_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Event API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
