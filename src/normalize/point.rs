//! Device-point normalization.

use serde_json::{Map, Value};

use super::coerce::{coerce_f64, first_present, stringify, Scalar};
use super::timestamp::{parse_flex, CivilZone};
use super::Rejection;
use crate::Point;

// ---

const MEASURED_KEYS: &[&str] = &["measured_date", "measured", "timestamp"];
const WATER_LEVEL_KEYS: &[&str] = &["waterlevel"];
const TEMPERATURE_KEYS: &[&str] = &["temperature"];
const BATTERY_KEYS: &[&str] = &["battery"];

const MM_PER_CM: f64 = 10.0;

/// Map one upstream data record onto a [`Point`].
///
/// The timestamp is required. Water level arrives in millimeters and is
/// converted to centimeters; temperature and battery pass through. Each
/// reading is independently optional.
pub fn normalize_device_point(record: &Map<String, Value>, zone: CivilZone) -> Result<Point, Rejection> {
    // ---
    let measured_raw = stringify(first_present(record, MEASURED_KEYS));
    if measured_raw.is_empty() {
        return Err(Rejection::MissingTimestamp);
    }
    let Some(measured) = parse_flex(&measured_raw, zone) else {
        return Err(Rejection::UnparsableTimestamp(measured_raw));
    };

    let reading = |keys: &[&str]| coerce_f64(Scalar::from(first_present(record, keys)));

    Ok(Point {
        t: measured.timestamp_millis(),
        water_level_cm: reading(WATER_LEVEL_KEYS).map(|mm| mm / MM_PER_CM),
        temperature: reading(TEMPERATURE_KEYS),
        battery_level: reading(BATTERY_KEYS),
        measured_raw,
    })
}
