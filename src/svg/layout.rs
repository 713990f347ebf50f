//! Geometry shared by every part of the document.
//!
//! States are laid out left to right, [`FRAME_SPACING`] units apart, inside a
//! nested viewport. All pixel measurements pass through [`Layout::scale`] so
//! text, baselines and cursor stay aligned.

use crate::config::StyleOptions;

use super::frame::CharMetrics;

/// Horizontal distance between consecutive states, in viewBox units.
pub const FRAME_SPACING: f64 = 100.0;

/// Minimum number of precomputed baseline rows.
pub const MIN_BASELINE_ROWS: usize = 30;

/// Resolved geometry for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub inner_x: i64,
    pub inner_y: i64,
    pub inner_width: i64,
    pub inner_height: i64,
    /// viewBox units per pixel
    pub scale: f64,
    pub char_width: f64,
    pub char_height: f64,
    pub state_count: usize,
}

impl Layout {
    pub fn new(style: &StyleOptions, metrics: CharMetrics, state_count: usize) -> Self {
        let padding = i64::from(style.padding);
        let bar = i64::from(style.bar_height());
        let inner_width = i64::from(style.width) - padding * 2;
        let inner_height = i64::from(style.height) - bar - padding * 2;
        let scale = if inner_width > 0 {
            FRAME_SPACING / inner_width as f64
        } else {
            0.0
        };

        Self {
            inner_x: padding,
            inner_y: bar + padding,
            inner_width,
            inner_height,
            scale,
            char_width: metrics.char_width,
            char_height: metrics.char_height,
            state_count,
        }
    }

    /// Width of the animation strip.
    pub fn view_box_width(&self) -> f64 {
        self.state_count as f64 * FRAME_SPACING
    }

    /// Visible height in viewBox units, keeping pixels square.
    pub fn view_box_height(&self) -> f64 {
        self.inner_height as f64 * self.scale
    }

    /// Horizontal offset of state `index` within the strip.
    pub fn state_offset(index: usize) -> f64 {
        index as f64 * FRAME_SPACING
    }

    /// Text baseline for `row`, near the bottom of its cell.
    pub fn baseline(&self, row: usize) -> f64 {
        let cell = self.char_height * self.scale;
        row as f64 * cell + cell * 0.8
    }

    /// X position of a text run starting at display column `col`.
    pub fn column_x(&self, col: usize) -> f64 {
        col as f64 * self.char_width * self.scale
    }

    /// Cursor block size in viewBox units.
    pub fn cursor_size(&self) -> (f64, f64) {
        (self.char_width * self.scale, self.char_height * self.scale)
    }
}
