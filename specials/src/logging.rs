//! Logger setup.

use log::LevelFilter;

/// Map `-v` occurrences to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` overrides the `-v` level.
pub fn init(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
