//! Event System
//!
//! Activity events shown in the dashboard log panel, built from `log` records.

use crate::logging::LogLevel;
use chrono::Local;
use log::Record;
use std::fmt::Display;

/// `log` targets used across the crate, one per event source.
pub mod targets {
    pub const LOADING: &str = "loading";
    pub const REFRESH: &str = "refresh";
    pub const TABLE: &str = "table";
    pub const EXPORT: &str = "export";
    pub const CHART: &str = "chart";
}

/// Part of the dashboard an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Loader,
    Refresh,
    Table,
    Export,
    Chart,
    App,
}

impl Source {
    pub fn from_target(target: &str) -> Self {
        match target {
            targets::LOADING => Source::Loader,
            targets::REFRESH => Source::Refresh,
            targets::TABLE => Source::Table,
            targets::EXPORT => Source::Export,
            targets::CHART => Source::Chart,
            _ => Source::App,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: impl Into<String>, level: LogLevel) -> Self {
        Self {
            source,
            msg: msg.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level,
        }
    }

    pub fn from_record(record: &Record) -> Self {
        Self::new(
            Source::from_target(record.target()),
            record.args().to_string(),
            record.level().into(),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level >= LogLevel::Warn
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.source, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_maps_to_app() {
        assert_eq!(Source::from_target("analytics_dashboard::ui"), Source::App);
        assert_eq!(Source::from_target(targets::EXPORT), Source::Export);
    }

    #[test]
    fn test_display_includes_source_and_message() {
        let event = Event::new(Source::Table, "Sorted by Clicks", LogLevel::Info);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Table ["));
        assert!(rendered.ends_with("Sorted by Clicks"));
        assert!(!event.is_error());
    }
}
