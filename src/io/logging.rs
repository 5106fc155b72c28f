//! Tracing subscriber setup for diagnostic output on stderr

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset and verbose output is off
pub const DEFAULT_LEVEL: &str = "warn";
/// Level used when `RUST_LOG` is unset and verbose output is on
pub const VERBOSE_LEVEL: &str = "debug";

/// Build the event filter, preferring `RUST_LOG` when it is set
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber
///
/// Subsequent calls are no-ops, so tests and embedding callers may call it freely.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
