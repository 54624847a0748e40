use axum::Router;

use crate::{Config, UpstreamClient};

mod field_data;
mod fields;
mod health;
mod misc;

// ---

/// Shared state handed to every route.
pub type AppState = (UpstreamClient, Config);

pub fn router(upstream: UpstreamClient, config: Config) -> Router {
    // ---
    Router::new()
        .merge(fields::router())
        .merge(field_data::router())
        .merge(misc::router())
        .merge(health::router())
        .with_state((upstream, config))
}
