//! # Telemetry
//!
//! Tracing initialization for whatever shell embeds the session layer.
//!
//! The command surface logs every dispatch at `debug!`; this module wires
//! those events to stderr with an env-filter so `RUST_LOG` controls
//! verbosity the usual way.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Call once at shell startup, before the first command dispatch. Default
/// filter is `info` globally with `debug` for the carta crates; override
/// with `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,carta_core=debug,carta_studio=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
