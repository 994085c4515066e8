//! Log output setup for the binary

use tracing::Level;

use crate::config::LoggingConfig;

/// Install the global fmt subscriber writing to stderr.
///
/// Only the first call takes effect; later calls are ignored so tests and
/// embedders that already installed a subscriber keep theirs.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Install the subscriber at the level named in `config`, defaulting to info.
pub fn init_from_config(config: &LoggingConfig) {
    init(config.max_level().unwrap_or(Level::INFO));
}
