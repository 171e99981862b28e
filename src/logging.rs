//! Logger setup for the command-line front end.

use log::LevelFilter;
use std::env;

/// Initialize logging to stderr.
///
/// Logs at `Info` by default or `Debug` when `verbose` is set; an explicit
/// `RUST_LOG` overrides either.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second call (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    log::debug!("logger initialized at {level:?} level");
}
