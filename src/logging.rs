//! Minimal stderr backend for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable overriding the verbosity flags (e.g. `GRIDCALC_LOG=debug`).
pub const LOG_ENV: &str = "GRIDCALC_LOG";

struct StderrLogger;

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

static LOGGER: StderrLogger = StderrLogger;

/// Level for `-v` repetitions: warn, info, debug, trace.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger. `GRIDCALC_LOG` wins over the flags when it parses.
pub fn init(verbose: u8, quiet: bool) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or_else(|| level_for(verbose, quiet));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
