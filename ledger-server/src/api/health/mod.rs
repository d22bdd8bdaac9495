//! Health check route
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "storage": "connected"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check router - public, no storage round-trip required beyond the
/// connectivity probe.
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Process status (always `ok` while the server answers)
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Storage connectivity: connected | disconnected
    storage: &'static str,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let connected = state.storage_connected().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: if connected { "connected" } else { "disconnected" },
    })
}
