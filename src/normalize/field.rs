//! Field-summary normalization.

use serde_json::{Map, Value};

use super::coerce::{coerce_f64, first_present, stringify, Scalar};
use super::Rejection;
use crate::Field;

// ---

const LATITUDE_KEYS: &[&str] = &["latitude", "lat", "LAT", "Latitude"];
const LONGITUDE_KEYS: &[&str] = &["longitude", "lon", "LON", "Longitude"];
const ID_KEYS: &[&str] = &["padid", "id"];
const NAME_KEYS: &[&str] = &["paddyname", "name"];
const OWNER_KEYS: &[&str] = &["owner_name", "owner"];

/// Display name for fields the upstream left unnamed.
pub const UNNAMED_FIELD: &str = "圃場";

/// Map one upstream device record onto a [`Field`].
///
/// Coordinates and id are required; name and owner fall back to defaults.
pub fn normalize_field_summary(record: &Map<String, Value>) -> Result<Field, Rejection> {
    // ---
    let latitude = coerce_f64(Scalar::from(first_present(record, LATITUDE_KEYS)));
    let longitude = coerce_f64(Scalar::from(first_present(record, LONGITUDE_KEYS)));
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Err(Rejection::MissingCoordinates);
    };

    let id = stringify(first_present(record, ID_KEYS));
    if id.is_empty() {
        return Err(Rejection::MissingId);
    }

    let mut name = stringify(first_present(record, NAME_KEYS));
    if name.is_empty() {
        name = UNNAMED_FIELD.to_string();
    }

    Ok(Field {
        id,
        name,
        latitude,
        longitude,
        owner_name: stringify(first_present(record, OWNER_KEYS)),
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> Result<Field, Rejection> {
        normalize_field_summary(value.as_object().unwrap())
    }

    #[test]
    fn test_canonical_record() {
        // ---
        let field = normalize(json!({
            "padid": "P-001",
            "paddyname": "East paddy",
            "latitude": 35.0,
            "longitude": "139.0",
            "owner_name": "Sato"
        }))
        .unwrap();

        assert_eq!(field.id, "P-001");
        assert_eq!(field.name, "East paddy");
        assert_eq!(field.latitude, 35.0);
        assert_eq!(field.longitude, 139.0);
        assert_eq!(field.owner_name, "Sato");
    }

    #[test]
    fn test_alias_keys() {
        // ---
        let field = normalize(json!({
            "id": 42,
            "name": "West",
            "LAT": "36.5",
            "Longitude": 140.25,
            "owner": "Suzuki"
        }))
        .unwrap();

        assert_eq!(field.id, "42");
        assert_eq!(field.latitude, 36.5);
        assert_eq!(field.longitude, 140.25);
        assert_eq!(field.owner_name, "Suzuki");
    }

    #[test]
    fn test_alias_priority_skips_null() {
        // ---
        let field = normalize(json!({
            "padid": null,
            "id": "fallback-id",
            "latitude": null,
            "lat": 1.5,
            "lon": 2.5,
            "longitude": 9.9
        }))
        .unwrap();

        assert_eq!(field.id, "fallback-id");
        assert_eq!(field.latitude, 1.5);
        assert_eq!(field.longitude, 9.9);
    }

    #[test]
    fn test_missing_coordinates_rejected() {
        // ---
        assert_eq!(normalize(json!({"padid": "P"})), Err(Rejection::MissingCoordinates));
        assert_eq!(
            normalize(json!({"padid": "P", "lat": 35.0})),
            Err(Rejection::MissingCoordinates)
        );
        assert_eq!(
            normalize(json!({"padid": "P", "lat": "", "lon": "north"})),
            Err(Rejection::MissingCoordinates)
        );
    }

    #[test]
    fn test_missing_id_rejected() {
        // ---
        assert_eq!(normalize(json!({"lat": 1, "lon": 2})), Err(Rejection::MissingId));
        assert_eq!(
            normalize(json!({"padid": "", "lat": 1, "lon": 2})),
            Err(Rejection::MissingId)
        );
    }

    #[test]
    fn test_defaults_for_name_and_owner() {
        // ---
        let field = normalize(json!({"padid": "P", "lat": 1, "lon": 2, "paddyname": ""})).unwrap();
        assert_eq!(field.name, UNNAMED_FIELD);
        assert_eq!(field.owner_name, "");
    }
}
