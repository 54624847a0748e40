//! Normalizing gateway in front of the paddy field telemetry API.
//!
//! The upstream API returns loosely-typed JSON whose keys and value formats
//! drift between device generations. This crate turns it into a stable,
//! typed schema:
//! - `normalize` – the pure normalization core (coercion, timestamps,
//!   field/point normalizers, range resolution, result assembly)
//! - `upstream` – the HTTP client for the telemetry API
//! - `routes` – the axum router exposing the normalized endpoints
//!
//! Following the Explicit Module Boundary Pattern (EMBP), sibling modules
//! import shared types from this gateway rather than from each other.

mod config;
mod error;
mod models;
pub mod normalize;
mod routes;
mod upstream;

pub use config::{load_from_env, Config};
pub use error::AppError;
pub use models::{Field, FieldDataResponse, Point, TimeRange};
pub use normalize::{
    assemble_data_window, assemble_field_listing, normalize_device_point, normalize_field_summary, resolve_range,
    CivilZone, Padding, Rejection,
};
pub use routes::{router, AppState};
pub use upstream::{UpstreamClient, UpstreamError};
