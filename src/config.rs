//! Configuration management for filterdesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, LIST_HEIGHT_DEFAULT_PERCENT, LIST_HEIGHT_MAX_PERCENT,
    LIST_HEIGHT_MIN_PERCENT,
};
use crate::ui::core::actions::Panel;
use crate::utils::{color, date};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Panel shown on startup
    /// Options: "purchases", "returns", "messages"
    pub default_panel: String,
    /// Enable mouse support (hover and click on filter fields)
    pub mouse_enabled: bool,
    /// Share of the screen height given to the record list
    pub list_height_percent: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for record dates and date input fields
    pub date_format: String,
    /// Show purchase and return amounts
    pub show_amounts: bool,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file holding the records to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

/// Colour names for one element in each interaction state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateColors {
    pub normal: String,
    pub hover: String,
    pub focus: String,
}

impl StateColors {
    fn new(normal: &str, hover: &str, focus: &str) -> Self {
        Self {
            normal: normal.to_string(),
            hover: hover.to_string(),
            focus: focus.to_string(),
        }
    }
}

/// Theme colours. Resolved once into a [`crate::theme::Theme`] at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub purchase: String,
    #[serde(rename = "return")]
    pub return_: String,
    pub message: String,
    pub field: StateColors,
    pub button: StateColors,
    pub list_row: StateColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_panel: "purchases".to_string(),
            mouse_enabled: true,
            list_height_percent: LIST_HEIGHT_DEFAULT_PERCENT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: date::DEFAULT_DATE_FORMAT.to_string(),
            show_amounts: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            purchase: "green".to_string(),
            return_: "yellow".to_string(),
            message: "blue".to_string(),
            field: StateColors::new("gray", "white", "yellow"),
            button: StateColors::new("dark_gray", "white", "cyan"),
            list_row: StateColors::new("reset", "light_blue", "yellow"),
        }
    }
}

impl ThemeConfig {
    /// All configured colour names with the key they came from
    pub fn named_colors(&self) -> Vec<(String, &str)> {
        let mut named = Vec::new();
        for (prefix, colors) in [("field", &self.field), ("button", &self.button), ("list_row", &self.list_row)] {
            named.push((format!("{}.normal", prefix), colors.normal.as_str()));
            named.push((format!("{}.hover", prefix), colors.hover.as_str()));
            named.push((format!("{}.focus", prefix), colors.focus.as_str()));
        }
        named.push(("purchase".to_string(), self.purchase.as_str()));
        named.push(("return".to_string(), self.return_.as_str()));
        named.push(("message".to_string(), self.message.as_str()));
        named
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if Panel::from_name(&self.ui.default_panel).is_none() {
            anyhow::bail!(
                "default_panel must be one of purchases, returns, messages, got '{}'",
                self.ui.default_panel
            );
        }

        if self.ui.list_height_percent < LIST_HEIGHT_MIN_PERCENT
            || self.ui.list_height_percent > LIST_HEIGHT_MAX_PERCENT
        {
            anyhow::bail!(
                "list_height_percent must be between {} and {}, got {}",
                LIST_HEIGHT_MIN_PERCENT,
                LIST_HEIGHT_MAX_PERCENT,
                self.ui.list_height_percent
            );
        }

        if !date::is_valid_date_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        for (key, name) in self.theme.named_colors() {
            if color::parse_color(name).is_none() {
                anyhow::bail!("Invalid theme colour for {}: '{}'", key, name);
            }
        }

        Ok(())
    }

    /// Panel to show on startup
    pub fn default_panel(&self) -> Panel {
        Panel::from_name(&self.ui.default_panel).unwrap_or_default()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# filterdesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(date::DEFAULT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
