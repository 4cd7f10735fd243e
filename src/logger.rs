//! Minimal `log` backend: one line per record on stderr.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Nowhere to report a failed write to stderr.
        writeln!(
            io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
        .ok();
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
