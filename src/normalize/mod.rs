//! Normalization core: loosely-typed upstream JSON in, typed entities out.
//!
//! Follows the Explicit Module Boundary Pattern (EMBP): sibling modules hold
//! the individual stages and this gateway re-exports the public surface.
//! Nothing here performs I/O or holds state between calls.

use thiserror::Error;

mod assemble;
mod coerce;
mod field;
mod point;
mod range;
mod timestamp;

pub use assemble::{assemble_data_window, assemble_field_listing, Padding, MIN_LISTED_FIELDS};
pub use coerce::{coerce_f64, first_present, stringify, Scalar};
pub use field::{normalize_field_summary, UNNAMED_FIELD};
pub use point::normalize_device_point;
pub use range::{resolve_range, DEFAULT_WINDOW_HOURS};
pub use timestamp::{format_upstream, parse_flex, CivilZone, ZoneError, EPOCH_MILLIS_THRESHOLD, UPSTREAM_FORMAT};

// ---

/// Why a single upstream record was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("missing coordinates")]
    MissingCoordinates,

    #[error("missing id")]
    MissingId,

    #[error("missing timestamp")]
    MissingTimestamp,

    #[error("unparsable timestamp '{0}'")]
    UnparsableTimestamp(String),
}
