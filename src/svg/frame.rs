//! Captured terminal frames, the input to SVG generation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsvgError};

/// Character cell metrics reported by the terminal emulator.
///
/// Constant for a capture session; the generator reads them from the first frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharMetrics {
    pub char_width: f64,
    pub char_height: f64,
    pub letter_spacing: f64,
}

impl CharMetrics {
    /// Metrics derived from a font size when the capture did not report any.
    pub fn fallback(font_size: f64) -> Self {
        Self {
            char_width: font_size * 0.55,
            char_height: font_size * 1.2,
            letter_spacing: 0.0,
        }
    }

    /// Whether these metrics carry a usable cell size.
    pub fn is_measured(&self) -> bool {
        self.char_width > 0.0
    }
}

/// A single captured screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Cursor column
    pub cursor_x: i32,
    /// Cursor row; negative when the cursor is hidden
    pub cursor_y: i32,
    pub cursor_pixel_x: f64,
    pub cursor_pixel_y: f64,
    /// Capture time in seconds
    pub timestamp: f64,
    #[serde(flatten)]
    pub metrics: CharMetrics,
}

impl Frame {
    /// Create a frame with the given lines and cursor cell, all else zeroed.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>, cursor: (i32, i32)) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            cursor_x: cursor.0,
            cursor_y: cursor.1,
            ..Self::default()
        }
    }
}

/// Parse a JSON array of frames.
pub fn parse_frames(json: &str) -> Result<Vec<Frame>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON frame capture from disk.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let content = fs::read_to_string(path).map_err(|source| TermsvgError::FramesRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_frames(&content)
}
