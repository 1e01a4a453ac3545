//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the benchgraph tracing/logging system.
///
/// Reads `BENCHGRAPH_LOG` for per-module log levels.
/// Format: `BENCHGRAPH_LOG=benchgraph_series::assembler=debug,benchgraph_core=warn`
///
/// Falls back to `benchgraph=info` if `BENCHGRAPH_LOG` is not set or is invalid.
/// Idempotent. If another subscriber is already installed, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("benchgraph=info"));

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
