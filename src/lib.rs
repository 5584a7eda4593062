pub mod breakdown;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod sweep;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Logs go to stderr so tables and JSON on stdout stay machine-readable.
/// `RUST_LOG` overrides the default `warn` level.
///
/// Note: This function can only be called once.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
