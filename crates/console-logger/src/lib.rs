//! Console Logger
//!
//! A `log` backend that forwards records to the browser console
//! (`console.debug/info/warn/error`) on wasm32, and to stderr elsewhere.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing every enabled record to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Render a record the way it appears in the console
    pub fn format(record: &Record) -> String {
        format!("[{} {}] {}", record.level(), record.target(), record.args())
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
        write_line(record.level(), &Self::format(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger as the global `log` backend.
///
/// Only the first call installs anything; later calls return the
/// `SetLoggerError` from `log` and leave the existing logger in place.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filtering() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let warn = Metadata::builder().level(Level::Warn).target("todos").build();
        let debug = Metadata::builder().level(Level::Debug).target("todos").build();

        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_off_disables_everything() {
        let logger = ConsoleLogger::new(LevelFilter::Off);
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&error));
    }

    #[test]
    fn test_format_includes_level_and_target() {
        let line = ConsoleLogger::format(
            &Record::builder()
                .args(format_args!("loaded {} todos", 3))
                .level(Level::Info)
                .target("todos_ui::remote")
                .build(),
        );
        assert_eq!(line, "[INFO todos_ui::remote] loaded 3 todos");
    }

    #[test]
    fn test_second_init_is_rejected() {
        // Whichever call wins the race, a later one must fail
        let _ = init(LevelFilter::Debug);
        assert!(init(LevelFilter::Trace).is_err());
    }
}
