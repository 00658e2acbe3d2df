//! Tracing initialization and configuration.

use std::sync::Once;

use recall_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging.
///
/// Reads the `RECALL_LOG` environment variable for per-crate log levels,
/// e.g. `RECALL_LOG=recall_storage=debug,recall_embeddings=warn`.
/// Falls back to `config.log_level` when unset or invalid. Idempotent, and
/// leaves an already-installed global subscriber alone.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RECALL_LOG").unwrap_or_else(|_| {
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
        });

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
