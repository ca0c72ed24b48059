//! Logging setup using env_logger
//!
//! `RUST_LOG` selects the level (e.g. `RUST_LOG=debug` to see every dispatch,
//! `RUST_LOG=trace` for subscriber bookkeeping). Defaults to `info`.

use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

/// Initialize logging to stderr
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
