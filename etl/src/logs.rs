//! Leveled pipeline log.
//!
//! Entries are printed to stderr (stdout is reserved for the column lists
//! and the analysis table) and forwarded to every live subscriber.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for sub-steps
    pub indent: u8,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            indent: 0,
            timestamp: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry as one console line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => " ",
            LogLevel::Success => "✓",
            LogLevel::Warning => "!",
            LogLevel::Error => "✗",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!(
            "[{}] {}{} {}",
            self.timestamp.format("%H:%M:%S"),
            indent,
            prefix,
            self.message
        )
    }
}

/// Process-wide log
pub static PIPELINE_LOG: Lazy<PipelineLog> = Lazy::new(PipelineLog::new);

/// Prints log entries and fans them out to subscribers.
pub struct PipelineLog {
    subscribers: Mutex<Vec<Sender<LogEntry>>>,
}

impl PipelineLog {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Print an entry and send it to all subscribers
    pub fn log(&self, entry: LogEntry) {
        eprintln!("{}", entry.render());

        if let Ok(mut subscribers) = self.subscribers.lock() {
            // Dropped receivers are pruned here.
            subscribers.retain(|tx| tx.send(entry.clone()).is_ok());
        }
    }

    /// Get a receiver for every entry logged from now on
    pub fn subscribe(&self) -> Receiver<LogEntry> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }
}

impl Default for PipelineLog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn log_info(msg: impl Into<String>) {
    PIPELINE_LOG.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    PIPELINE_LOG.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    PIPELINE_LOG.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    PIPELINE_LOG.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    PIPELINE_LOG.log(LogEntry::info(msg).with_indent(indent));
}
