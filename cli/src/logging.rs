//! Logging setup

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// The level is `warn`, or `debug` with `verbose`; `RUST_LOG` overrides
/// both.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (as in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
