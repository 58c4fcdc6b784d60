use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default level.
///
/// Logs go to stderr so stdout carries only the success banner. Calling
/// this twice is harmless; the second call is ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
