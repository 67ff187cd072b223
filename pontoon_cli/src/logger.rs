//! Minimal stderr backend for the `log` facade.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "PONTOON_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name; unknown names fall back to `Warn`.
fn level_from_str(s: &str) -> LevelFilter {
    s.trim().parse::<Level>().map(|l| l.to_level_filter()).unwrap_or(LevelFilter::Warn)
}

/// Install the logger. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        std::env::var(LOG_ENV)
            .map(|v| level_from_str(&v))
            .unwrap_or(LevelFilter::Warn)
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
