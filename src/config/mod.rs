//! Configuration file support for gridnote.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/gridnote/config.toml`. Settings
//! include drawing defaults, the toolbar palette, and grid-paper page layout.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ToolbarPosition};
pub use types::{DrawingConfig, PageConfig, PaletteConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 3.0
///
/// [palette]
/// colors = ["black", "blue", "red", "green", "orange", "purple"]
/// widths = [1.5, 3.0, 4.5, 6.0]
///
/// [page]
/// grid_spacing = 24.0
/// page_width = 800.0
///
/// [ui]
/// show_toolbar = true
/// toolbar_position = "top"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Toolbar palette (swatch colors, width presets)
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Grid-paper page layout
    #[serde(default)]
    pub page: PageConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width` and palette widths: 0.5 - 24.0
    /// - `grid_spacing`: 8.0 - 64.0
    /// - `page_width`: 320.0 - 2048.0
    /// - palette color/width lists: non-empty (fall back to defaults)
    fn validate_and_clamp(&mut self) {
        // Stroke width: 0.5 - 24.0
        if !(0.5..=24.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 0.5-24.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = self.drawing.default_width.clamp(0.5, 24.0);
        }

        // Grid spacing: 8.0 - 64.0
        if !(8.0..=64.0).contains(&self.page.grid_spacing) {
            log::warn!(
                "Invalid grid_spacing {:.1}, clamping to 8.0-64.0 range",
                self.page.grid_spacing
            );
            self.page.grid_spacing = self.page.grid_spacing.clamp(8.0, 64.0);
        }

        // Page width: 320.0 - 2048.0
        if !(320.0..=2048.0).contains(&self.page.page_width) {
            log::warn!(
                "Invalid page_width {:.1}, clamping to 320.0-2048.0 range",
                self.page.page_width
            );
            self.page.page_width = self.page.page_width.clamp(320.0, 2048.0);
        }

        // Palette lists must stay usable: an empty toolbar has nothing to
        // dispatch, so fall back to the defaults.
        if self.palette.colors.is_empty() {
            log::warn!("Empty palette.colors, using default palette");
            self.palette.colors = PaletteConfig::default().colors;
        }
        if self.palette.widths.is_empty() {
            log::warn!("Empty palette.widths, using default widths");
            self.palette.widths = PaletteConfig::default().widths;
        }
        for width in &mut self.palette.widths {
            if !(0.5..=24.0).contains(width) {
                log::warn!("Invalid palette width {width:.1}, clamping to 0.5-24.0 range");
                *width = width.clamp(0.5, 24.0);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gridnote/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gridnote");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/gridnote/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
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

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/gridnote/config.toml`. Creates the parent directory if it
    /// doesn't exist.
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
    /// config directory (used by `gridnote --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
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

    /// JSON schema for the config file, for editor completion and the
    /// `dump_config_schema` helper binary.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
