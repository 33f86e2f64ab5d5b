//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser console
//! (`console.debug/info/warn/error`) on `wasm32` and to stderr everywhere else,
//! so native unit tests never touch JS imports.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Stateless logger; filtering happens through `log::max_level`.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger with the given maximum level.
///
/// Fails if another logger was already installed for this process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line("09:15:02.041", Level::Info, "fleet::edit", "saved record 7");
        assert_eq!(line, "09:15:02.041 INFO  [fleet::edit] saved record 7");
    }

    #[test]
    fn test_format_line_error() {
        let line = format_line("23:59:59.999", Level::Error, "fleet", "boom");
        assert_eq!(line, "23:59:59.999 ERROR [fleet] boom");
    }

    #[test]
    fn test_init_respects_level() {
        // First install wins; a second call must fail without panicking.
        let first = init(LevelFilter::Warn);
        let second = init(LevelFilter::Trace);
        assert!(first.is_ok());
        assert!(second.is_err());
        assert_eq!(log::max_level(), LevelFilter::Warn);

        let info = Metadata::builder().level(Level::Info).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!LOGGER.enabled(&info));
        assert!(LOGGER.enabled(&error));
    }
}
