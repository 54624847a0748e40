// src/routes/health.rs
//! Liveness endpoint for the paddyflow gateway.
//!
//! `GET /health` answers without contacting the upstream API. The status is
//! always `ok` while the process serves requests; the `degraded` flag and
//! `timezone` show a deployment stuck in the host-local fallback.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timezone: String,
    degraded: bool,
}

async fn health(State((_, config)): State<AppState>) -> Json<HealthResponse> {
    // ---
    Json(HealthResponse {
        status: "ok",
        timezone: config.timezone.to_string(),
        degraded: config.timezone.is_degraded(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
