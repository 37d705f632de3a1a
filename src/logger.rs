//! Logger setup shared by the binaries

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` logger at `Info`, overridable through `RUST_LOG`.
///
/// Safe to call more than once.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host program.
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_logging_levels() {
        initialize_logger();
        initialize_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
