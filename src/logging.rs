#![cfg(feature = "std")]

//! Minimal stdout sink for the `log` facade used across the engine.

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`trace` .. `error`, `off`).
pub const LOG_ENV: &str = "BATTLEGEEK_LOG";

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// `LEVEL module: message`, with the crate prefix dropped from the module
/// path so engine lines read `DEBUG board: shot (2, 3) missed`.
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target.strip_prefix("battlegeek::").unwrap_or(target);
    format!("{:<5} {}: {}", record.level(), module, record.args())
}

/// Level named by `value`, `info` when absent or unparsable.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stdout logger with the level taken from [`LOG_ENV`].
/// A second call keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
