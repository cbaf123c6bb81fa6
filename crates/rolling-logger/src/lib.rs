//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards each record to a [`LogSink`] (browser console, stderr, ...).
//!
//! The app only installs it with a console sink. [`RollingLogger::recent`],
//! [`RollingLogger::clear`] and [`StderrSink`] are library API for embedders
//! that want to show or export the buffered records, or run off the browser.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// A captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS.mmm LEVEL target: message`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Destination for formatted records
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

/// Sink writing to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, entry: &LogEntry) {
        eprintln!("{}", entry.format_line());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Records kept before the oldest is dropped
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::Info,
        }
    }
}

/// Fixed-size buffer of recent records
#[derive(Debug)]
struct RingBuffer {
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

/// Logger handle; clones share the same buffer
#[derive(Clone)]
pub struct RollingLogger {
    level: LevelFilter,
    buffer: Arc<Mutex<RingBuffer>>,
    sink: Arc<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: impl LogSink + 'static) -> Self {
        Self {
            level: config.level,
            buffer: Arc::new(Mutex::new(RingBuffer::new(config.capacity))),
            sink: Arc::new(sink),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .map(|b| b.entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut b) = self.buffer.lock() {
            b.entries.clear();
        }
    }

    fn capture(&self, entry: LogEntry) {
        self.sink.write(&entry);
        if let Ok(mut b) = self.buffer.lock() {
            b.push(entry);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.capture(LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Install a rolling logger as the global `log` backend.
///
/// Returns a handle for reading the buffer back.
pub fn init(config: LoggerConfig, sink: impl LogSink + 'static) -> Result<RollingLogger, SetLoggerError> {
    let logger = RollingLogger::new(config, sink);
    log::set_boxed_logger(Box::new(logger.clone()))?;
    log::set_max_level(config.level);
    Ok(logger)
}
