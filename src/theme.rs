//! Color theme for rendered terminals.
//!
//! Colors are plain CSS color strings and are emitted into the document
//! unchanged. No color math happens here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsvgError};

/// The eight ANSI color names, in the order their fill classes are emitted.
pub const ANSI_COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Terminal color theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    /// Default text color
    pub foreground: String,
    /// Fill of the blinking cursor block
    pub cursor: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme matching common editor terminal palettes.
    pub fn dark() -> Self {
        Self {
            black: "#000000".to_string(),
            red: "#cd3131".to_string(),
            green: "#0dbc79".to_string(),
            yellow: "#e5e510".to_string(),
            blue: "#2472c8".to_string(),
            magenta: "#bc3fbc".to_string(),
            cyan: "#11a8cd".to_string(),
            white: "#e5e5e5".to_string(),
            foreground: "#d4d4d4".to_string(),
            cursor: "#ffffff".to_string(),
        }
    }

    /// Light theme for documentation pages with white backgrounds.
    pub fn light() -> Self {
        Self {
            black: "#000000".to_string(),
            red: "#cd3131".to_string(),
            green: "#00bc00".to_string(),
            yellow: "#949800".to_string(),
            blue: "#0451a5".to_string(),
            magenta: "#bc05bc".to_string(),
            cyan: "#0598bc".to_string(),
            white: "#555555".to_string(),
            foreground: "#333333".to_string(),
            cursor: "#000000".to_string(),
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(TermsvgError::UnknownTheme(name.to_string())),
        }
    }

    /// ANSI colors paired with their class names, in [`ANSI_COLOR_NAMES`] order.
    pub fn named_colors(&self) -> [(&'static str, &str); 8] {
        [
            (ANSI_COLOR_NAMES[0], self.black.as_str()),
            (ANSI_COLOR_NAMES[1], self.red.as_str()),
            (ANSI_COLOR_NAMES[2], self.green.as_str()),
            (ANSI_COLOR_NAMES[3], self.yellow.as_str()),
            (ANSI_COLOR_NAMES[4], self.blue.as_str()),
            (ANSI_COLOR_NAMES[5], self.magenta.as_str()),
            (ANSI_COLOR_NAMES[6], self.cyan.as_str()),
            (ANSI_COLOR_NAMES[7], self.white.as_str()),
        ]
    }
}
