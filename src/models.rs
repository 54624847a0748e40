//! Typed entities produced by the normalization core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---

/// A monitored paddy field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    // ---
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner_name: String,
}

/// One time-series sample for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    // ---
    /// Epoch milliseconds.
    pub t: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_level_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    /// Timestamp exactly as the upstream sent it.
    pub measured_raw: String,
}

/// Response body for a data-window request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDataResponse {
    // ---
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Point>,
}

/// Query window with `from <= to` guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range from two instants in either order.
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        // ---
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }
}
