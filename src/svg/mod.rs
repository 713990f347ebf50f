//! Animated SVG generation from terminal frames.
//!
//! The pipeline deduplicates frames into unique screen states, builds a
//! percentage timeline over them and emits a document whose CSS keyframes
//! slide a strip of states past a clipped viewport. Document size grows with
//! the number of unique states, not with the number of frames.
//!
//! # Module Structure
//!
//! - [`frame`] - Captured frames and JSON loading
//! - [`state`] - Fingerprinting, the state registry and the timeline
//! - [`processor`] - Deduplication pass and the compaction extension point
//! - [`layout`] - Shared geometry (scale factor, viewport)
//! - [`chrome`] - Window background and title bar
//! - [`styles`] - Keyframes and CSS classes
//! - [`symbols`] - Reusable `<symbol>` definitions
//! - [`lines`] - Per-state text rendering
//! - [`generator`] - Document assembly

pub mod chrome;
mod escape;
pub mod frame;
pub mod generator;
pub mod layout;
pub mod lines;
pub mod processor;
pub mod state;
pub mod styles;
pub mod symbols;

pub use chrome::WindowBar;
pub use escape::escape;
pub use frame::{load_frames, parse_frames, CharMetrics, Frame};
pub use generator::SvgGenerator;
pub use layout::{Layout, FRAME_SPACING};
pub use processor::{FrameProcessor, NoCompaction, ProcessedFrames, StateCompactor};
pub use state::{hash_state, KeyframeStop, StateRegistry, TerminalState, Timeline};
