//! Query-window resolution.

use chrono::{DateTime, Duration, Utc};

use super::timestamp::{parse_flex, CivilZone};
use crate::TimeRange;

// ---

/// Look-back used when the caller supplies no `from`.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Resolve the effective window for a data request.
///
/// Defaults to the trailing 24 hours ending at `now`. A supplied bound
/// replaces its default only when it parses; empty or unparsable strings
/// are ignored. Inverted bounds are swapped.
pub fn resolve_range(from: Option<&str>, to: Option<&str>, now: DateTime<Utc>, zone: CivilZone) -> TimeRange {
    // ---
    let bound = |raw: Option<&str>| raw.filter(|s| !s.is_empty()).and_then(|s| parse_flex(s, zone));

    let from = bound(from).unwrap_or(now - Duration::hours(DEFAULT_WINDOW_HOURS));
    let to = bound(to).unwrap_or(now);

    TimeRange::new(from, to)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    fn tokyo() -> CivilZone {
        CivilZone::named("Asia/Tokyo").unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 23, 3, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults_to_trailing_day() {
        // ---
        let range = resolve_range(None, None, now(), tokyo());
        assert_eq!(range.from(), now() - Duration::hours(24));
        assert_eq!(range.to(), now());
    }

    #[test]
    fn test_bounds_override_independently() {
        // ---
        let range = resolve_range(Some("2025-12-22T00:00:00+09:00"), None, now(), tokyo());
        assert_eq!(range.from(), Utc.with_ymd_and_hms(2025, 12, 21, 15, 0, 0).unwrap());
        assert_eq!(range.to(), now());

        let range = resolve_range(None, Some("2025-12-23 00:00:00"), now(), tokyo());
        assert_eq!(range.from(), now() - Duration::hours(24));
        assert_eq!(range.to(), Utc.with_ymd_and_hms(2025, 12, 22, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        // ---
        let range = resolve_range(Some("2099-01-01 00:00:00"), Some("2000-01-01 00:00:00"), now(), tokyo());
        assert!(range.from() <= range.to());
        assert_eq!(range.from(), Utc.with_ymd_and_hms(1999, 12, 31, 15, 0, 0).unwrap());
        assert_eq!(range.to(), Utc.with_ymd_and_hms(2098, 12, 31, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_default_from_after_supplied_to_is_swapped() {
        // ---
        let range = resolve_range(None, Some("2000-01-01 00:00:00"), now(), tokyo());
        assert_eq!(range.from(), Utc.with_ymd_and_hms(1999, 12, 31, 15, 0, 0).unwrap());
        assert_eq!(range.to(), now() - Duration::hours(24));
    }

    #[test]
    fn test_garbage_bounds_are_ignored() {
        // ---
        let range = resolve_range(Some("soon"), Some(""), now(), tokyo());
        assert_eq!(range, resolve_range(None, None, now(), tokyo()));
    }
}
