//! Configuration: optional `~/.workcal/config.json` plus command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::types::{Result, WorkcalError};

/// Directory under $HOME holding config, default snapshot and log file
const APP_DIR_NAME: &str = ".workcal";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATA_FILE_NAME: &str = "dashboard.json";
const LOG_FILE_NAME: &str = "workcal.log";

/// Color scheme selection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Detect from terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

/// On-disk config file; every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemePreference>,
}

/// Values given on the command line, which beat the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub api_url: Option<String>,
    pub theme: Option<ThemePreference>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub app_dir: PathBuf,
    pub data_file: PathBuf,
    pub api_url: Option<String>,
    pub theme: ThemePreference,
}

impl Config {
    /// Load from `~/.workcal`
    pub fn load(overrides: Overrides) -> Result<Self> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| WorkcalError::Config("Cannot determine home directory".into()))?;
        let app_dir = base_dirs.home_dir().join(APP_DIR_NAME);
        Self::load_from(&app_dir, overrides)
    }

    /// Load from an explicit app directory (used by tests)
    pub fn load_from(app_dir: &Path, overrides: Overrides) -> Result<Self> {
        let file = read_file_config(&app_dir.join(CONFIG_FILE_NAME))?;

        let data_file = overrides
            .data_file
            .or(file.data_file)
            .unwrap_or_else(|| app_dir.join(DEFAULT_DATA_FILE_NAME));
        let api_url = overrides
            .api_url
            .or(file.api_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let theme = overrides.theme.or(file.theme).unwrap_or_default();

        Ok(Self {
            app_dir: app_dir.to_path_buf(),
            data_file,
            api_url,
            theme,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.app_dir.join(LOG_FILE_NAME)
    }
}

/// Missing file is fine; a file that exists but is not valid JSON is not
fn read_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| WorkcalError::Config(format!("{}: {}", path.display(), e)))
}
