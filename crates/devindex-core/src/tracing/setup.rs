//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-crate filter directives.
pub const LOG_ENV_VAR: &str = "DEVINDEX_LOG";

/// Initialize logging with compiled defaults.
///
/// Reads `DEVINDEX_LOG` for per-crate levels, e.g.
/// `DEVINDEX_LOG=devindex_clustering=debug,devindex_analysis=info`.
/// Falls back to `devindex=info` if unset or invalid.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Initialize logging from a `LoggingConfig`.
///
/// `DEVINDEX_LOG` still wins over `config.level`. Idempotent: only the
/// first call installs a subscriber, and an already-installed global
/// subscriber is left in place.
pub fn init_tracing_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let fallback = fallback_directive(config.effective_level());
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        // Err means a subscriber (e.g. a test harness) already owns the global slot.
        let _already_set = if config.effective_json() {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .try_init()
                .is_err()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .is_err()
        };
    });
}

/// Expand a bare level (`"debug"`) into a directive scoped to our crates.
fn fallback_directive(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    [
        "devindex",
        "devindex_core",
        "devindex_scoring",
        "devindex_inequality",
        "devindex_clustering",
        "devindex_analysis",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
