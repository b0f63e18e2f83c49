//! Logging configuration.
//!
//! A `log4rs.yml` in the working directory wins. Without one, logs go to
//! stderr at the level named by `NETCALC_LOG` (default `warn`) so stdout only
//! carries calculator output.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
pub const LOG_LEVEL_ENV: &str = "NETCALC_LOG";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Parse a level name such as `debug` or `OFF`.
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Build the stderr logging config used when no `log4rs.yml` is present.
pub fn build_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    Ok(config)
}

/// Install the global logger. Call once, before any logging.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::debug!("Logging configured from {LOG_CONFIG_FILE}");
        return Ok(());
    }

    let requested = std::env::var(LOG_LEVEL_ENV).ok();
    let level = requested
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    log4rs::init_config(build_config(level)?)?;

    if let Some(value) = requested.filter(|v| parse_log_level(v).is_none()) {
        log::warn!("Unknown {LOG_LEVEL_ENV}={value:?}, using {DEFAULT_LOG_LEVEL}");
    }
    Ok(())
}
