//! Configuration loader for the `paddyflow-gateway` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::env;

use anyhow::{anyhow, Result};

use crate::normalize::{CivilZone, Padding};

/// Parse an optional numeric variable with a default value.
macro_rules! parse_var {
    ($lookup:expr, $var_name:expr, $ty:ty, $default:expr) => {
        $lookup($var_name)
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

pub const DEFAULT_UPSTREAM_URL: &str = "http://dev.amberlogix.co.jp";
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Telemetry API base URL, without a trailing slash.
    pub upstream_url: String,

    /// Upper bound on a single upstream request, in seconds.
    pub upstream_timeout_secs: u64,

    /// Zone for offset-less timestamps and the upstream query format.
    pub timezone: CivilZone,

    /// Top up short field listings with placeholder fields.
    pub pad_fields: bool,

    /// HTTP listen port.
    pub port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `AMBERLOGIX_BASE_URL` – telemetry API base URL (default: `http://dev.amberlogix.co.jp`)
/// - `UPSTREAM_TIMEOUT_SECS` – upstream request timeout (default: 15)
/// - `TARGET_TIMEZONE` – IANA zone name (default: `Asia/Tokyo`)
/// - `PAD_FIELDS` – `0|false|no|off` disables listing padding (default: on)
/// - `PORT` – listen port (default: 8080)
///
/// Returns an error if a numeric variable is invalid. An unknown timezone
/// is not an error: the host local zone is used and a warning is logged.
pub fn load_from_env() -> Result<Config> {
    // ---
    load(|name| env::var(name).ok())
}

fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    // ---
    let upstream_url = lookup("AMBERLOGIX_BASE_URL")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    let upstream_timeout_secs = parse_var!(lookup, "UPSTREAM_TIMEOUT_SECS", u64, 15);
    let port = parse_var!(lookup, "PORT", u16, 8080);

    let zone_name = lookup("TARGET_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let timezone = CivilZone::named(&zone_name).unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to the host local timezone (degraded mode)", e);
        CivilZone::HostLocal
    });

    let pad_fields = !matches!(
        lookup("PAD_FIELDS").as_deref().map(str::to_ascii_lowercase).as_deref(),
        Some("0") | Some("false") | Some("no") | Some("off")
    );

    Ok(Config {
        upstream_url,
        upstream_timeout_secs,
        timezone,
        pad_fields,
        port,
    })
}

impl Config {
    pub fn padding(&self) -> Padding {
        if self.pad_fields {
            Padding::Enabled
        } else {
            Padding::Disabled
        }
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  AMBERLOGIX_BASE_URL   : {}", self.upstream_url);
        tracing::info!("  UPSTREAM_TIMEOUT_SECS : {}", self.upstream_timeout_secs);
        tracing::info!("  TARGET_TIMEZONE       : {}", self.timezone);
        tracing::info!("  PAD_FIELDS            : {}", self.pad_fields);
        tracing::info!("  PORT                  : {}", self.port);

        if self.timezone.is_degraded() {
            tracing::warn!("Running with host local timezone; upstream timestamps may be misread");
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        load(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        // ---
        let cfg = load_from(&[]).unwrap();
        assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(cfg.upstream_timeout_secs, 15);
        assert_eq!(cfg.timezone, CivilZone::named("Asia/Tokyo").unwrap());
        assert!(cfg.pad_fields);
        assert_eq!(cfg.padding(), Padding::Enabled);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn test_overrides() {
        // ---
        let cfg = load_from(&[
            ("AMBERLOGIX_BASE_URL", "http://localhost:9000/"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("TARGET_TIMEZONE", "UTC"),
            ("PAD_FIELDS", "Off"),
            ("PORT", "3000"),
        ])
        .unwrap();

        assert_eq!(cfg.upstream_url, "http://localhost:9000");
        assert_eq!(cfg.upstream_timeout_secs, 3);
        assert_eq!(cfg.timezone.to_string(), "UTC");
        assert_eq!(cfg.padding(), Padding::Disabled);
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn test_unknown_timezone_degrades() {
        // ---
        let cfg = load_from(&[("TARGET_TIMEZONE", "Nowhere/Special")]).unwrap();
        assert!(cfg.timezone.is_degraded());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        // ---
        let err = load_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }
}
