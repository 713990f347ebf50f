//! Configuration management for termsvg.
//!
//! A [`Config`] is an explicit value handed to the generator. Every field has a
//! default, so partial TOML files (or no file at all) still produce a fully
//! populated configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsvgError};
use crate::svg::WindowBar;
use crate::theme::Theme;

/// Font size used when the configured one is not positive.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

const DEFAULT_MARGIN_FILL: &str = "#000000";
const DEFAULT_BACKGROUND: &str = "#1e1e1e";
const DEFAULT_BAR_COLOR: &str = "#2d2d2d";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: StyleOptions,
    pub theme: Theme,
}

/// Canvas geometry, window chrome and animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Terminal window width in pixels (excluding margin)
    pub width: u32,
    /// Terminal window height in pixels (excluding margin)
    pub height: u32,
    pub font_size: f64,
    pub font_family: String,
    /// Inset between the window edge and the text area
    pub padding: u32,
    /// Space around the window, filled with `margin_fill`
    pub margin: u32,
    pub margin_fill: String,
    pub window_bar: WindowBar,
    /// Height of the title bar when `window_bar` is set
    pub window_bar_size: u32,
    pub window_bar_color: String,
    pub background_color: String,
    /// Corner radius of the window; negative values render square corners
    pub border_radius: i32,
    /// Total loop length in seconds. Derived from frame timestamps when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            font_size: DEFAULT_FONT_SIZE,
            font_family: "Menlo".to_string(),
            padding: 20,
            margin: 0,
            margin_fill: DEFAULT_MARGIN_FILL.to_string(),
            window_bar: WindowBar::Darwin,
            window_bar_size: 30,
            window_bar_color: DEFAULT_BAR_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            border_radius: 8,
            duration: None,
        }
    }
}

impl StyleOptions {
    /// Font size with non-positive values replaced by the default.
    pub fn resolved_font_size(&self) -> f64 {
        if self.font_size.is_finite() && self.font_size > 0.0 {
            self.font_size
        } else {
            DEFAULT_FONT_SIZE
        }
    }

    /// Border radius clamped to zero.
    pub fn resolved_border_radius(&self) -> u32 {
        self.border_radius.max(0).unsigned_abs()
    }

    pub fn resolved_margin_fill(&self) -> &str {
        non_empty_or(&self.margin_fill, DEFAULT_MARGIN_FILL)
    }

    pub fn resolved_background(&self) -> &str {
        non_empty_or(&self.background_color, DEFAULT_BACKGROUND)
    }

    pub fn resolved_bar_color(&self) -> &str {
        non_empty_or(&self.window_bar_color, DEFAULT_BAR_COLOR)
    }

    /// Vertical space taken by the title bar (zero when there is none).
    pub fn bar_height(&self) -> u32 {
        if self.window_bar.is_visible() {
            self.window_bar_size
        } else {
            0
        }
    }

    /// Canvas size including the margin on both sides.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.width + self.margin * 2,
            self.height + self.margin * 2,
        )
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl Config {
    /// Get the default config file path (`<config dir>/termsvg/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(TermsvgError::NoConfigDir)?;
        Ok(dir.join("termsvg").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TermsvgError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        let write_err = |source: std::io::Error| TermsvgError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }
}
