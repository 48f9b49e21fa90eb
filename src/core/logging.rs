//! Logging configuration and initialization
//!
//! Sets up the tracing subscriber for the embedding application. The crate
//! itself only emits debug-level diagnostics against [`LOG_TARGET`];
//! verbosity is resolved once at startup from the configured level, with
//! `RUST_LOG` taking precedence when set.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed target for all diagnostic output from this crate.
pub const LOG_TARGET: &str = "campaign_standard";

/// Map a configured level string onto a tracing directive, defaulting to
/// "info" for anything unrecognized. "warning" and "critical" are accepted
/// for compatibility with upstream configuration files.
fn normalize_level(log_level: &str) -> &'static str {
    match log_level
        .split_whitespace()
        .next()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

/// Initialize the logging system with the specified level.
///
/// `RUST_LOG` overrides the configured level when present. Call once at
/// process start; a second call panics because the global subscriber is
/// already set, so applications embedding several SDKs should install
/// their own subscriber instead.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
