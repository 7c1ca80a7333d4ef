//! Console Logger
//!
//! `log` backend for the browser: forwards records to `console.*` at the
//! matching level and keeps the most recent lines in a circular buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity line buffer, oldest lines evicted first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            recent: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent.lock().map(|buf| buf.lines()).unwrap_or_default()
    }

    /// Buffered lines as one block, or `None` when nothing was logged
    pub fn report(&self) -> Option<String> {
        let lines = self.recent();
        if lines.is_empty() {
            return None;
        }
        Some(format!("recent log ({} lines):\n{}", lines.len(), lines.join("\n")))
    }
}

/// "12:00:01.123 INFO  target: message"
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());

        #[cfg(target_arch = "wasm32")]
        {
            let msg = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }

        if let Ok(mut buf) = self.recent.lock() {
            buf.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Only the first call takes effect.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Report of the installed logger's buffered lines, for panic output
pub fn recent_report() -> Option<String> {
    LOGGER.get().and_then(ConsoleLogger::report)
}
