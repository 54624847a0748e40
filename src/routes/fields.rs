// src/routes/fields.rs
//! `GET /api/fields` – normalized field listing.
//!
//! Pulls the device listing from upstream, runs it through the normalization
//! core and returns the accepted fields. A listing where nothing survives is
//! reported as an upstream failure rather than an empty success.

use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use super::AppState;
use crate::{assemble_field_listing, AppError, Field};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/fields", get(handler))
}

async fn handler(State((upstream, config)): State<AppState>) -> Result<Json<Vec<Field>>, AppError> {
    // ---
    let records = upstream.fetch_devices().await?;
    let fields = assemble_field_listing(&records, config.padding());

    if fields.is_empty() {
        return Err(AppError::NoFields);
    }

    info!("GET /api/fields - {} upstream records, {} fields", records.len(), fields.len());
    Ok(Json(fields))
}
