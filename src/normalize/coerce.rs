//! Best-effort scalar coercion over loosely-typed upstream values.
//!
//! Upstream records drift between `12.5`, `"12.5"`, `""` and `null` for the
//! same attribute. Everything here folds those shapes into `Option<f64>` or a
//! plain string without ever failing.

use serde_json::{Map, Value};

// ---

/// One upstream value, classified by shape before coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// Key missing or JSON `null`.
    Absent,
    Number(f64),
    Text(&'a str),
    /// Booleans, arrays and objects.
    Other(&'a Value),
}

impl<'a> From<Option<&'a Value>> for Scalar<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        // ---
        let Some(value) = value else {
            return Scalar::Absent;
        };
        match value {
            Value::Null => Scalar::Absent,
            Value::Number(n) => n.as_f64().map_or(Scalar::Other(value), Scalar::Number),
            Value::String(s) => Scalar::Text(s),
            other => Scalar::Other(other),
        }
    }
}

/// Coerce a scalar into a finite decimal.
///
/// Absent values, empty strings and anything that does not parse as a
/// base-10 decimal all come back as `None`.
pub fn coerce_f64(scalar: Scalar<'_>) -> Option<f64> {
    // ---
    let parsed = match scalar {
        Scalar::Absent => None,
        Scalar::Number(n) => Some(n),
        Scalar::Text(s) => parse_decimal(s),
        Scalar::Other(v) => parse_decimal(&v.to_string()),
    };
    parsed.filter(|n| n.is_finite())
}

fn parse_decimal(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Render a value the way it should appear in a text attribute.
///
/// Strings are taken verbatim, everything else uses its JSON text. `None`
/// and `null` render as the empty string.
pub fn stringify(value: Option<&Value>) -> String {
    // ---
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// First value present and non-null under any of `keys`, in priority order.
pub fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}
