//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::Result;
use crate::report::{ReportMode, ReportOptions, DEFAULT_MAX_CELLS};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Terminal display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Report settings
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Whether equal aligned lines are listed too
    #[serde(default)]
    pub mode: ReportMode,

    /// Largest alignment table to build before falling back to a summary
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            max_cells: default_max_cells(),
        }
    }
}

fn default_max_cells() -> usize {
    DEFAULT_MAX_CELLS
}

/// Terminal display settings
#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    /// Colorize reports
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| super::Error::file_read(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Report options described by this configuration
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            mode: self.report.mode,
            max_cells: self.report.max_cells,
        }
    }
}
