//! Route table for the stub gateway

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::server::AppState;

/// Path the stub serves the connector on, mirroring an ESB proxy service
/// address.
pub const PROXY_PATH: &str = "/services/jotform";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(PROXY_PATH, post(handlers::dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
