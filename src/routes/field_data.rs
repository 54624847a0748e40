// src/routes/field_data.rs
//! `GET /api/fields/{id}/data` – normalized time series for one field.
//!
//! Query parameters `from` and `to` are optional and accept anything the
//! flexible timestamp parser does; the window defaults to the trailing 24h.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::{assemble_data_window, resolve_range, AppError, FieldDataResponse};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/fields/{id}/data", get(handler))
}

/// Query parameters for the data window.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    from: Option<String>,
    to: Option<String>,
}

async fn handler(
    Path(padid): Path<String>,
    Query(params): Query<WindowQuery>,
    State((upstream, config)): State<AppState>,
) -> Result<Json<FieldDataResponse>, AppError> {
    // ---
    let zone = config.timezone;
    let range = resolve_range(params.from.as_deref(), params.to.as_deref(), Utc::now(), zone);
    info!(
        "GET /api/fields/{}/data - window {} .. {}",
        padid,
        range.from(),
        range.to()
    );

    let records = upstream.fetch_device_data(&padid, range, zone).await?;
    let window = assemble_data_window(&records, zone);

    info!(
        "GET /api/fields/{}/data - {} upstream records, {} points",
        padid,
        records.len(),
        window.points.len()
    );
    Ok(Json(window))
}
