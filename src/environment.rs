use crate::logging::LogLevel;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Run mode selected by `DASHBOARD_ENV`.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Verbose activity log, for working on the dashboard itself.
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Reads `DASHBOARD_ENV`, falling back to the default on unset or unknown values.
    pub fn from_env() -> Self {
        std::env::var("DASHBOARD_ENV")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Activity-log threshold used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> LogLevel {
        match self {
            Environment::Development => LogLevel::Debug,
            Environment::Production => LogLevel::Info,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "Development"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("DEV".parse(), Ok(Environment::Development));
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!("staging".parse::<Environment>(), Err(()));
    }

    #[test]
    fn test_default_log_levels() {
        assert_eq!(Environment::Development.default_log_level(), LogLevel::Debug);
        assert_eq!(Environment::default().default_log_level(), LogLevel::Info);
    }
}
