//! Flexible timestamp parsing anchored to a civil timezone.
//!
//! Upstream timestamps arrive as epoch milliseconds, RFC 3339 strings, or
//! offset-less wall-clock strings that are implicitly in the business
//! timezone. [`parse_flex`] accepts all of them; [`format_upstream`] renders
//! an instant back into the wall-clock form the upstream query expects.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

// ---

/// Integers above this are read as epoch milliseconds; anything at or below
/// it (seconds epochs, small ids) is not.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Wall-clock layout used by the upstream query string.
pub const UPSTREAM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock layouts accepted on input; `%.f` takes optional fractional seconds.
const CIVIL_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Error)]
#[error("unknown timezone '{name}': {reason}")]
pub struct ZoneError {
    pub name: String,
    pub reason: String,
}

/// The timezone used for every offset-less timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivilZone {
    Named(Tz),
    /// Degraded mode when the named zone cannot be loaded.
    HostLocal,
}

impl CivilZone {
    /// Look up a zone by IANA name, e.g. `Asia/Tokyo`.
    pub fn named(name: &str) -> Result<Self, ZoneError> {
        // ---
        name.parse::<Tz>()
            .map(CivilZone::Named)
            .map_err(|err| ZoneError {
                name: name.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, CivilZone::HostLocal)
    }

    /// Resolve a wall-clock reading in this zone. Repeated local times pick
    /// the earlier instant; skipped ones do not exist.
    fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        // ---
        match self {
            CivilZone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            CivilZone::HostLocal => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    fn wall_clock(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            CivilZone::Named(tz) => instant.with_timezone(tz).naive_local(),
            CivilZone::HostLocal => instant.with_timezone(&Local).naive_local(),
        }
    }
}

impl fmt::Display for CivilZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CivilZone::Named(tz) => f.write_str(tz.name()),
            CivilZone::HostLocal => f.write_str("host local"),
        }
    }
}

/// Parse a timestamp string, first match wins:
///
/// 1. base-10 integer above [`EPOCH_MILLIS_THRESHOLD`] as epoch milliseconds
/// 2. RFC 3339 with offset or `Z`
/// 3. `YYYY-MM-DD HH:MM:SS[.fff]` as wall-clock time in `zone`
/// 4. `YYYY-MM-DDTHH:MM:SS[.fff]` as wall-clock time in `zone`
///
/// Returns `None` when nothing matches.
pub fn parse_flex(s: &str, zone: CivilZone) -> Option<DateTime<Utc>> {
    // ---
    if let Ok(ms) = s.parse::<i64>() {
        if ms > EPOCH_MILLIS_THRESHOLD {
            return Utc.timestamp_millis_opt(ms).single();
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    CIVIL_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .and_then(|naive| zone.localize(&naive))
}

/// Render `instant` as `YYYY-MM-DD HH:MM:SS` wall-clock time in `zone`.
/// Sub-second precision is dropped.
pub fn format_upstream(instant: DateTime<Utc>, zone: CivilZone) -> String {
    zone.wall_clock(instant).format(UPSTREAM_FORMAT).to_string()
}
