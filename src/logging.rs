//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// Log level comes from `RUST_LOG` when set, defaulting to `info`. Output
/// goes to stderr so the snapshot file stays the only thing on stdout-adjacent
/// paths a wrapper script might capture.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .init();
}
