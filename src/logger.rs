//! Custom logging module.
//!
//! Captures log records through a callback so the application can show them
//! in the log panel instead of writing over the terminal UI.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{mpsc, Arc, Mutex};

pub type LogEntrySender = mpsc::Sender<String>;

/// Format a log record into a string for display.
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Logger that hands formatted records to a callback.
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<LogCallback>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the global logger, forwarding every entry into `sender`.
/// Entries are dropped once the receiving end is gone.
///
pub fn install(sender: LogEntrySender, level: LevelFilter) -> Result<(), AppError> {
    let logger = CustomLogger::new(level);
    let sender = Mutex::new(sender);
    logger.set_log_callback(Box::new(move |entry| {
        if let Ok(sender) = sender.lock() {
            let _ = sender.send(entry);
        }
    }));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
