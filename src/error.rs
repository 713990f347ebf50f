//! Errors for the I/O edges around SVG generation.
//!
//! Generation itself never fails; these cover reading configuration and
//! frame captures, and writing the rendered document.

use std::path::PathBuf;

/// Errors that can occur while loading inputs or saving output.
#[derive(Debug, thiserror::Error)]
pub enum TermsvgError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read frames from {path}: {source}")]
    FramesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid frame data: {0}")]
    FramesParse(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),

    #[error("Unknown window bar '{0}' (expected darwin, windows, filled, outline or none)")]
    UnknownWindowBar(String),
}

/// Convenience alias for results carrying [`TermsvgError`].
pub type Result<T> = std::result::Result<T, TermsvgError>;
