//! Configuration file handling for DormKit
//!
//! Supports JSON and TOML files. The default file lives in the platform config
//! directory (`<config_dir>/dormkit/config.toml`).
//!
//! Configuration is organized into sections:
//! - Window size
//! - Furniture palette placement
//! - Trash region placement
//! - Logging

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dormkit";
const CONFIG_FILE: &str = "config.toml";

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Furniture palette placement along the right window edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Width of one palette entry
    pub entry_width: f64,
    /// Height of one palette entry
    pub entry_height: f64,
    /// Vertical distance between entry tops
    pub spacing: f64,
    /// Top of the first entry
    pub top: f64,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            entry_width: 140.0,
            entry_height: 160.0,
            spacing: 160.0,
            top: 100.0,
        }
    }
}

/// Trash region in the bottom-right corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrashSettings {
    /// Side length of the square trash region
    pub size: f64,
    /// Gap to the right and bottom window edges
    pub margin: f64,
}

impl Default for TrashSettings {
    fn default() -> Self {
        Self {
            size: 100.0,
            margin: 20.0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowSettings,
    pub palette: PaletteSettings,
    pub trash: TrashSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/dormkit/config.toml`.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads the default config file, or the built-in defaults when it does
    /// not exist.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = match Self::default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(%err, "using default config");
                return Ok(Self::default());
            }
        };
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::invalid(
                "window",
                format!(
                    "dimensions must be > 0, got {}x{}",
                    self.window.width, self.window.height
                ),
            ));
        }

        positive("palette.entry_width", self.palette.entry_width)?;
        positive("palette.entry_height", self.palette.entry_height)?;
        positive("palette.spacing", self.palette.spacing)?;
        if !self.palette.top.is_finite() || self.palette.top < 0.0 {
            return Err(SettingsError::invalid(
                "palette.top",
                format!("must be >= 0, got {}", self.palette.top),
            ));
        }
        if self.palette.entry_width > self.window.width as f64 {
            return Err(SettingsError::invalid(
                "palette.entry_width",
                "wider than the window",
            ));
        }

        positive("trash.size", self.trash.size)?;
        if !self.trash.margin.is_finite() || self.trash.margin < 0.0 {
            return Err(SettingsError::invalid(
                "trash.margin",
                format!("must be >= 0, got {}", self.trash.margin),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }
}
