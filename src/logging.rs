//! Console Logging
//!
//! Routes `log` records through the rolling logger to the browser console.

use log::Level;
use rolling_logger::{LogEntry, LogSink, LoggerConfig};
use wasm_bindgen::JsValue;

/// Sink writing to `console.*` by level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = JsValue::from(entry.format_line());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

pub fn init() {
    if let Err(e) = rolling_logger::init(LoggerConfig::default(), ConsoleSink) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
}
