//! Batch assembly: normalize every record, drop rejects, shape the result.

use serde_json::Value;
use tracing::debug;

use super::field::normalize_field_summary;
use super::point::normalize_device_point;
use super::timestamp::CivilZone;
use crate::{Field, FieldDataResponse};

// ---

/// Minimum number of entries a padded field listing carries.
pub const MIN_LISTED_FIELDS: usize = 3;

/// Coordinate deltas (lat, lon) applied to the first field for placeholders.
const PADDING_OFFSETS: [(f64, f64); 3] = [(0.0010, 0.0015), (-0.0012, 0.0020), (0.0008, -0.0018)];

const PLACEHOLDER_OWNER: &str = "ダミー所有者";

/// Whether a short field listing is topped up with placeholder fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Enabled,
    Disabled,
}

/// Normalize a device listing. Rejected records are dropped; with
/// [`Padding::Enabled`] a non-empty result shorter than
/// [`MIN_LISTED_FIELDS`] is padded with placeholders.
pub fn assemble_field_listing(records: &[Value], padding: Padding) -> Vec<Field> {
    // ---
    let mut fields = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let Some(record) = record.as_object() else {
            debug!("Skipping device record {}: not an object", i);
            continue;
        };
        match normalize_field_summary(record) {
            Ok(field) => fields.push(field),
            Err(reason) => debug!("Skipping device record {}: {}", i, reason),
        }
    }

    if padding == Padding::Enabled {
        pad_fields(&mut fields);
    }
    fields
}

fn pad_fields(fields: &mut Vec<Field>) {
    // ---
    let Some(first) = fields.first() else {
        return;
    };
    let (base_lat, base_lon) = (first.latitude, first.longitude);

    let missing = MIN_LISTED_FIELDS.saturating_sub(fields.len());
    for (n, (d_lat, d_lon)) in (1..).zip(PADDING_OFFSETS).take(missing) {
        fields.push(Field {
            id: format!("dummy-{n}"),
            name: format!("仮圃場{n}"),
            latitude: base_lat + d_lat,
            longitude: base_lon + d_lon,
            owner_name: PLACEHOLDER_OWNER.to_string(),
        });
    }
}

/// Normalize a data window: drop rejects, sort by `t` (stable, so records
/// sharing a timestamp keep their upstream order) and pick the latest point.
pub fn assemble_data_window(records: &[Value], zone: CivilZone) -> FieldDataResponse {
    // ---
    let mut points = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let Some(record) = record.as_object() else {
            debug!("Skipping data record {}: not an object", i);
            continue;
        };
        match normalize_device_point(record, zone) {
            Ok(point) => points.push(point),
            Err(reason) => debug!("Skipping data record {}: {}", i, reason),
        }
    }

    points.sort_by_key(|p| p.t);
    let last = points.last().cloned();

    FieldDataResponse { points, last }
}
