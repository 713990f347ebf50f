//! Subcommand handlers for the termsvg binary.

pub mod completions;
pub mod config;
pub mod render;
