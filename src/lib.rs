//! termsvg Library
//!
//! Turns a captured sequence of terminal screens into a single animated SVG.

pub mod cli;
pub mod config;
pub mod error;
pub mod svg;
pub mod theme;

pub use config::{Config, StyleOptions};
pub use error::TermsvgError;
pub use svg::{Frame, SvgGenerator, WindowBar};
pub use theme::Theme;
