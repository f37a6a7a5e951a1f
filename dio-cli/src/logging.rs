// ============================================================================
// dio-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialization for the dio binary
//
// The application uses the standard `log` crate with `env_logger` as the
// backend. Logs go to stderr so stdout stays clean for results.
// - default: Info
// - --verbose: Debug
// - RUST_LOG, when set, overrides both

use log::LevelFilter;
use std::io::Write;

/// Level used when RUST_LOG is not set.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
pub fn init_logging(verbose: bool) {
    let level = default_level(verbose);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level_str, record.args())
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}
