use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of rows fetched per table (default: 100)
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,

    /// JSON dataset to browse; the built-in sample dataset is used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Layout and panel settings
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_row_limit() -> usize {
    100
}

fn default_sidebar_percent() -> u16 {
    20
}

fn default_sidebar_min_width() -> u16 {
    20
}

/// Layout and panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Share of the terminal width given to the table list, in percent
    #[serde(default = "default_sidebar_percent")]
    pub sidebar_percent: u16,

    /// The table list never gets narrower than this many cells
    #[serde(default = "default_sidebar_min_width")]
    pub sidebar_min_width: u16,

    /// Start with the key help lines visible
    #[serde(default)]
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_percent: default_sidebar_percent(),
            sidebar_min_width: default_sidebar_min_width(),
            show_help: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_limit: default_row_limit(),
            data_file: None,
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Location of the user config file, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tabletop").join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults if not found
    pub fn load_or_default() -> Self {
        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                match Self::load_from_file(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to load config from {}: {}, using defaults",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_limit == 0 {
            return Err(ConfigError::ValidationError(
                "row_limit must be greater than 0".to_string(),
            ));
        }

        if self.ui.sidebar_percent == 0 || self.ui.sidebar_percent > 80 {
            return Err(ConfigError::ValidationError(
                "ui.sidebar_percent must be between 1 and 80".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
