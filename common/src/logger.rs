use std::sync::{Mutex, OnceLock};
use chrono::Local;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use serde::{Deserialize, Serialize};

const ERROR_HISTORY_SIZE: usize = 100;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub timestamp: String,
    pub message: String,
}

pub struct Logger {
    prefix: Option<String>,
    errors: Mutex<AllocRingBuffer<ErrorEntry>>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            errors: Mutex::new(AllocRingBuffer::new(ERROR_HISTORY_SIZE)),
        }
    }

    fn line(&self, timestamp: &str, message: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", self.line(&timestamp, message));
    }

    /// Writes to stderr and keeps the entry in a bounded history.
    pub fn error(&self, message: &str) {
        let timestamp = Local::now().to_rfc3339();
        eprintln!("{}", self.line(&timestamp, message));

        if let Ok(mut errors) = self.errors.lock() {
            let _ = errors.enqueue(ErrorEntry {
                timestamp,
                message: message.to_string(),
            });
        }
    }

    pub fn recent_errors(&self) -> Vec<ErrorEntry> {
        match self.errors.lock() {
            Ok(errors) => errors.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Puts `saved` entries from an earlier run in front of the ones
    /// recorded so far, keeping only the newest entries that fit.
    pub fn restore_errors(&self, saved: Vec<ErrorEntry>) {
        if let Ok(mut errors) = self.errors.lock() {
            let current: Vec<ErrorEntry> = errors.iter().cloned().collect();
            errors.clear();
            for entry in saved.into_iter().chain(current) {
                let _ = errors.enqueue(entry);
            }
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn log_error(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.error(message);
    } else {
        eprintln!("{}", message);
    }
}

pub fn recent_errors() -> Vec<ErrorEntry> {
    LOGGER.get().map(Logger::recent_errors).unwrap_or_default()
}

pub fn restore_errors(saved: Vec<ErrorEntry>) {
    if let Some(logger) = LOGGER.get() {
        logger.restore_errors(saved);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log_error(&format!($($arg)*))
    };
}
