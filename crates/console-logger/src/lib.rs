//! Console Logger
//!
//! A `log` backend that forwards records to the browser devtools console.
//! Errors go to `console.error`, warnings to `console.warn`, everything else
//! to `console.log`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Console logger with a fixed max level
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = JsValue::from_str(&format_line(&timestamp, record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Passes everything through; `log::max_level` does the filtering
static LOGGER: ConsoleLogger = ConsoleLogger::new(LevelFilter::Trace);

/// Install the console logger as the global `log` backend.
///
/// Returns an error if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format: `12:00:00.000 WARN  todo_list_ui::storage: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("08:15:00.250", Level::Warn, "todo_list_ui::storage", "[STORAGE] bad data");
        assert_eq!(line, "08:15:00.250 WARN  todo_list_ui::storage: [STORAGE] bad data");
    }

    #[test]
    fn test_init_installs_once() {
        assert!(init(LevelFilter::Info).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(init(LevelFilter::Debug).is_err());
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
