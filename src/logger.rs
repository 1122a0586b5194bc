//! Logger setup shared by the binary and tests.

use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// Millisecond timestamps make the per-frame timing lines readable.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .filter_level(level)
        .init();
}
