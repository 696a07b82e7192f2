//! Configuration file support for fingerpaint.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/fingerpaint/config.toml`.
//! Settings include drawing defaults, canvas appearance, session
//! persistence, gallery export, and the style-transfer service.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, SessionCompression, SessionStorageMode};
pub use types::{
    CanvasConfig, DrawingConfig, ExportConfig, SessionConfig, StylePreset, StyleTransferConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the
/// TOML file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_brush_size = 5.0
///
/// [canvas]
/// background_color = "#FFFFFF"
///
/// [session]
/// enabled = true
///
/// [style_transfer]
/// endpoint = "https://styles.example.net"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, brush size, palette)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas appearance (background color, background image limits)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Gallery export and share settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Remote style-transfer service settings
    #[serde(default)]
    pub style_transfer: StyleTransferConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a hand-edited config can never produce out-of-range
    /// tool state.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1.0 - 100.0
    /// - `min_background_scale`: 0.05 - 1.0
    /// - `style_transfer.timeout_secs`: 1 - 300
    fn validate_and_clamp(&mut self) {
        // Brush size: 1.0 - 100.0
        if !(1.0..=100.0).contains(&self.drawing.default_brush_size) {
            warn!(
                "Invalid default_brush_size {:.1}, clamping to 1.0-100.0 range",
                self.drawing.default_brush_size
            );
            self.drawing.default_brush_size = self.drawing.default_brush_size.clamp(1.0, 100.0);
        }

        // Recent sizes: positive, at most three
        if self.drawing.recent_sizes.len() > 3 {
            warn!(
                "recent_sizes holds {} entries, keeping the first 3",
                self.drawing.recent_sizes.len()
            );
            self.drawing.recent_sizes.truncate(3);
        }
        self.drawing.recent_sizes.retain(|&size| {
            if (1.0..=100.0).contains(&size) {
                true
            } else {
                warn!("Dropping out-of-range recent size {:.1}", size);
                false
            }
        });

        // Background scale minimum: 0.05 - 1.0
        if !(0.05..=1.0).contains(&self.canvas.min_background_scale) {
            warn!(
                "Invalid min_background_scale {:.3}, clamping to 0.05-1.0 range",
                self.canvas.min_background_scale
            );
            self.canvas.min_background_scale = self.canvas.min_background_scale.clamp(0.05, 1.0);
        }

        // Style transfer timeout: 1 - 300 seconds
        if !(1..=300).contains(&self.style_transfer.timeout_secs) {
            warn!(
                "Invalid style_transfer timeout {}s, clamping to 1-300s range",
                self.style_transfer.timeout_secs
            );
            self.style_transfer.timeout_secs = self.style_transfer.timeout_secs.clamp(1, 300);
        }

        // Endpoint must be an absolute URL
        if url::Url::parse(&self.style_transfer.endpoint).is_err() {
            warn!(
                "Invalid style_transfer endpoint '{}', falling back to default",
                self.style_transfer.endpoint
            );
            self.style_transfer.endpoint = StyleTransferConfig::default().endpoint;
        }

        // Export format: only formats the renderer/export path can produce
        if !matches!(self.export.format.to_lowercase().as_str(), "svg" | "png") {
            warn!(
                "Invalid export format '{}', falling back to 'svg'",
                self.export.format
            );
            self.export.format = "svg".to_string();
        }

        // Styles need non-empty ids; an empty list loses the feature
        self.style_transfer
            .styles
            .retain(|style| !style.id.is_empty());
        if self.style_transfer.styles.is_empty() {
            warn!("No usable style presets configured, restoring defaults");
            self.style_transfer.styles = StyleTransferConfig::default().styles;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/fingerpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fingerpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/fingerpaint/config.toml`. Creates the parent directory
    /// if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// Builds the JSON schema for the whole configuration tree.
    ///
    /// Consumed by the `dump_config_schema` binary and external editors.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
