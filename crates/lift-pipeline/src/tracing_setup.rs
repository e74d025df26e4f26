//! Tracing initialization.

use std::sync::Once;

use lift_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the LIFT tracing subscriber.
///
/// Reads `LIFT_LOG` for per-crate levels, e.g.
/// `LIFT_LOG=lift_privacy=debug,lift_session=warn`.
/// Falls back to `lift=info` if `LIFT_LOG` is unset or invalid.
///
/// Idempotent. Only the first call installs a subscriber.
pub fn init_tracing() {
    init_with_fallback("info");
}

/// Like [`init_tracing`], with the fallback level taken from config.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    init_with_fallback(&config.log_level);
}

fn init_with_fallback(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LIFT_LOG")
            .or_else(|_| EnvFilter::try_new(format!("lift={level}")))
            .unwrap_or_else(|_| EnvFilter::new("lift=info"));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
