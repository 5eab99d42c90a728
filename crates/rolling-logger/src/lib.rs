//! Rolling Logger
//!
//! `log` backend that keeps the most recent entries in a circular buffer
//! so the UI can show them, and mirrors every entry to the browser console
//! (stderr when running natively, e.g. under `cargo test`).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Entries kept in memory by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:<5} {}", self.timestamp, self.level, self.message)
    }
}

/// Fixed-size ring of log entries, oldest evicted first
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Logger errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<LogBuffer>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(LogBuffer::new(capacity)),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
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

        let entry = LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&format!("{} {}", self.app_name, entry), entry.level);

        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(line: &str, level: Level) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(line: &str, _level: Level) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Snapshot of the buffered entries, oldest first
pub fn recent_entries() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::error!("{}", message);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "00:00:00.000".to_string(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push(make_entry("one"));
        buffer.push(make_entry("two"));
        buffer.push(make_entry("three"));

        let messages: Vec<String> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(buffer.len(), 2);

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = LogBuffer::new(0);
        buffer.push(make_entry("a"));
        buffer.push(make_entry("b"));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new("Test", LevelFilter::Warn, 10);

        logger.log(&Record::builder().args(format_args!("ignored")).level(Level::Info).build());
        logger.log(&Record::builder().args(format_args!("kept")).level(Level::Error).build());

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
        assert_eq!(entries[0].level, Level::Error);
    }

    #[test]
    fn test_helpers_require_init() {
        // No test installs the global logger
        assert_eq!(info("hello"), Err(LoggerError::NotInitialized));
        assert_eq!(error("oops"), Err(LoggerError::NotInitialized));
        assert!(recent_entries().is_empty());
    }

    #[test]
    fn test_entry_display() {
        let entry = make_entry("[GROUPS] Loaded 3 groups");
        assert_eq!(entry.to_string(), "[00:00:00.000] INFO  [GROUPS] Loaded 3 groups");
    }
}
