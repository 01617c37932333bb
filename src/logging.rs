//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default log level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise the level comes from the `-v` count.
/// Calling this twice is harmless.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keepport={}", level_for_verbosity(verbose))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
