use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::Config;

/// Smallest face whose back still shows the contact rows next to a
/// 29-module QR code, enough for websites up to 42 bytes.
pub const MIN_FACE_WIDTH: u16 = 64;
pub const MIN_FACE_HEIGHT: u16 = 18;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bizcard/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bizcard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card.face_width < MIN_FACE_WIDTH || self.card.face_height < MIN_FACE_HEIGHT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Card face must be at least {}x{} cells, got {}x{}",
                    MIN_FACE_WIDTH, MIN_FACE_HEIGHT, self.card.face_width, self.card.face_height
                ),
            });
        }

        if !(2..=8).contains(&self.export.scale) {
            return Err(ConfigError::ValidationError {
                message: format!("Export scale must be between 2 and 8, got {}", self.export.scale),
            });
        }

        if self.export.file_name.trim().is_empty()
            || self.export.file_name.contains(['/', '\\'])
        {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid export file name '{}'", self.export.file_name),
            });
        }

        parse_hex_color(&self.export.background)?;

        if let Err(err) = Url::parse(&self.shortener.endpoint) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Shortener endpoint '{}' is not a valid URL: {}",
                    self.shortener.endpoint, err
                ),
            });
        }

        if self.shortener.query_param.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Shortener query parameter must not be empty".to_string(),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick must be at least 1ms".to_string(),
            });
        }

        Ok(())
    }
}

/// Parses `#rrggbb` into its channels.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], ConfigError> {
    let invalid = || ConfigError::ValidationError {
        message: format!("Color '{}' must look like #rrggbb", value),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
