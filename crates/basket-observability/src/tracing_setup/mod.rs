//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use basket_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `BASKET_LOG` takes precedence over `config.log_level`. An invalid
/// directive falls back to `info`. Only the first call has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("BASKET_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.json_logs;

    INIT.call_once(move || {
        let registry = tracing_subscriber::registry().with(filter);
        // `try_init` so an embedding application's subscriber wins.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}
