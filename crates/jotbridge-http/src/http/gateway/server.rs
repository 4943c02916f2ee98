//! Stub connector gateway server
//!
//! Stands in for the ESB proxy plus the Jotform connector behind it: one
//! POST endpoint, `Action`-header routing, Jotform-shaped response
//! envelopes. The envelope's `responseCode` mirrors the HTTP status, the
//! way the connector surfaces the upstream code in both places.

use axum::http::StatusCode;
use jotbridge::properties::defaults;
use log::info;
use std::sync::{Arc, RwLock};
use tokio::net::TcpListener;

use super::routes::create_router;
use super::store::ConnectorStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: RwLock<ConnectorStore>,
    /// The API key the stub accepts; anything else is unauthorized.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: defaults::API_KEY.to_string(),
        }
    }
}

pub fn envelope_status(response_code: i64) -> StatusCode {
    match response_code {
        200 => StatusCode::OK,
        401 => StatusCode::UNAUTHORIZED,
        404 => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn create_app_state(config: GatewayConfig) -> AppState {
    Arc::new(AppStateInner {
        store: RwLock::new(ConnectorStore::seeded()),
        api_key: config.api_key,
    })
}

pub async fn start_server(
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = create_app_state(config);
    let app = create_router(app_state.clone());
    let bind_address = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    info!("jotbridge stub gateway starting on http://{bind_address}");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Gateway failed to start: {e}"))?;
    Ok(())
}
