//! Application entry point for the `paddyflow-gateway` service.
//!
//! This binary orchestrates the startup sequence for the gateway:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Building the upstream telemetry client
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `AMBERLOGIX_BASE_URL` (optional) – upstream telemetry API base URL
//! - `UPSTREAM_TIMEOUT_SECS` (optional) – upstream timeout (default: 15)
//! - `TARGET_TIMEZONE` (optional) – civil timezone (default: `Asia/Tokyo`)
//! - `PAD_FIELDS` (optional) – pad short field listings (default: on)
//! - `PORT` (optional) – listen port (default: 8080)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use std::{env, net::SocketAddr, time::Duration};

use anyhow::Result;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use paddyflow_gateway::{load_from_env, router, UpstreamClient};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = load_from_env()?;
    cfg.log_config();

    let upstream = UpstreamClient::new(
        cfg.upstream_url.clone(),
        Duration::from_secs(cfg.upstream_timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("Failed to build upstream client for '{}': {}", cfg.upstream_url, e))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    // Build app from routes gateway (EMBP)
    let app = router(upstream, cfg);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Install the process-wide tracing subscriber (compact, with target/file/line).
///
/// Verbosity: `RUST_LOG` when set, else `AXUM_LOG_LEVEL` (default `debug`)
/// for this crate with `hyper` and `reqwest` held at `info`, so upstream
/// connection chatter stays out of per-record drop logs. `AXUM_SPAN_EVENTS`
/// picks `full` or `enter_exit` span events (close only otherwise) and
/// `FORCE_COLOR` overrides TTY colour detection.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1" | "true" | "yes") => true,
        Ok("0" | "false" | "no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(log_filter(env::var("RUST_LOG").ok(), env::var("AXUM_LOG_LEVEL").ok()))
        .with_ansi(use_color)
        .compact()
        .init();
}

fn log_filter(rust_log: Option<String>, level: Option<String>) -> EnvFilter {
    // ---
    if let Some(directives) = rust_log {
        return EnvFilter::new(directives);
    }
    let level = level
        .filter(|l| matches!(l.as_str(), "trace" | "debug" | "info" | "warn" | "error"))
        .unwrap_or_else(|| "debug".to_string());
    EnvFilter::new(format!("{level},hyper=info,reqwest=info"))
}
