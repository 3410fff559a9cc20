//! Application configuration.

use crate::consts::cli_consts::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const DEFAULT_APP_NAME: &str = "Analytics Dashboard";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Display name shown in the header.
    pub app_name: String,
    /// Version string shown in the header; the crate version when unset.
    pub app_version: Option<String>,
    /// Rows per table page.
    pub page_size: usize,
    /// Force the narrow layout regardless of terminal width.
    pub compact: bool,
    pub with_background_color: bool,
    /// Where CSV exports are written.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: None,
            page_size: DEFAULT_PAGE_SIZE,
            compact: false,
            with_background_color: true,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Apply `DASHBOARD_APP_NAME` and `DASHBOARD_APP_VERSION` overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("DASHBOARD_APP_NAME").ok(),
            std::env::var("DASHBOARD_APP_VERSION").ok(),
        )
    }

    fn with_overrides(mut self, app_name: Option<String>, app_version: Option<String>) -> Self {
        if let Some(name) = app_name.filter(|name| !name.trim().is_empty()) {
            self.app_name = name;
        }
        if let Some(version) = app_version.filter(|version| !version.trim().is_empty()) {
            self.app_version = Some(version);
        }
        self
    }

    /// Version shown in the UI.
    pub fn display_version(&self) -> String {
        self.app_version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

/// Default config location: `~/.analytics-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".analytics-dashboard").join("config.json"))
}
