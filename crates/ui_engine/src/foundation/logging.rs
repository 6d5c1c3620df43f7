//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Initialize the logging system, ignoring a logger that is already installed
///
/// Useful from tests and from hosts that may set up their own logger first.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}
