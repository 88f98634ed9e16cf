//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_VAR: &str = "GRADEBOOK_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Reads `GRADEBOOK_LOG` (e.g. `gradebook=debug`). Defaults to `warn` so the
/// interactive transcript on stdout stays clean. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
