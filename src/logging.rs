//! Log routing
//!
//! `log` records are turned into dashboard events and delivered to the
//! activity log panel over a bounded channel.

use crate::events::Event;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

/// Threshold from `RUST_LOG`, or `default` when unset.
pub fn get_rust_log_level(default: LogLevel) -> LogLevel {
    match env::var("RUST_LOG") {
        Ok(rust_log) => parse_rust_log_level(&rust_log),
        Err(_) => default,
    }
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// `log::Log` implementation that forwards records to the dashboard.
#[derive(Debug)]
pub struct EventLogger {
    sender: mpsc::Sender<Event>,
    threshold: LogLevel,
}

impl EventLogger {
    pub fn new(sender: mpsc::Sender<Event>, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }
}

impl log::Log for EventLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A full queue drops the record rather than blocking the caller.
        let _ = self.sender.try_send(Event::from_record(record));
    }

    fn flush(&self) {}
}

/// Install the event logger as the global `log` backend.
pub fn init_event_logger(
    sender: mpsc::Sender<Event>,
    threshold: LogLevel,
) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(EventLogger::new(sender, threshold)))?;
    log::set_max_level(threshold.into());
    Ok(())
}
