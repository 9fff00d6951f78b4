//! Console logger behind the `log` facade.
//!
//! On wasm32 records go to the browser console through `web_sys`, elsewhere
//! to stderr. Install once with [`init_logger`]; later calls are ignored.

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&value),
                log::Level::Warn => web_sys::console::warn_1(&value),
                log::Level::Info => web_sys::console::info_1(&value),
                log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&value),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Install the console logger with the given max level.
///
/// Returns `false` if another logger was already installed.
pub fn init_logger(level: LevelFilter) -> bool {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}
