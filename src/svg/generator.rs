//! Document assembly.
//!
//! [`SvgGenerator`] owns an explicit [`Config`] and turns a frame capture into
//! one self-contained, self-animating SVG string.

use rayon::prelude::*;

use crate::config::Config;

use super::chrome::render_window;
use super::frame::{CharMetrics, Frame};
use super::layout::{Layout, MIN_BASELINE_ROWS};
use super::lines::render_state;
use super::processor::{FrameProcessor, NoCompaction, ProcessedFrames, StateCompactor};
use super::styles::{render_styles, TextStyle};
use super::symbols::SymbolTable;

/// Loop length used when neither the config nor the timestamps provide one.
pub const DEFAULT_DURATION_SECS: f64 = 1.0;

/// Generates animated SVG documents from terminal frames.
pub struct SvgGenerator {
    config: Config,
    compactor: Box<dyn StateCompactor>,
}

impl SvgGenerator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            compactor: Box::new(NoCompaction),
        }
    }

    /// Replace the post-dedup compaction strategy.
    pub fn with_compactor(mut self, compactor: impl StateCompactor + 'static) -> Self {
        self.compactor = Box::new(compactor);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Deduplicate frames and build the timeline without rendering.
    pub fn process(&self, frames: &[Frame]) -> ProcessedFrames {
        FrameProcessor::with_compactor(self.compactor.as_ref()).process(frames)
    }

    /// Render `frames` into a complete SVG document.
    pub fn generate(&self, frames: &[Frame]) -> String {
        let processed = self.process(frames);
        let style = &self.config.style;
        let font_size = style.resolved_font_size();
        let metrics = char_metrics(frames, font_size);
        let layout = Layout::new(style, metrics, processed.registry.len());
        let duration = resolve_duration(style.duration, frames);

        let (total_width, total_height) = style.canvas_size();
        let mut output = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            total_width, total_height
        );

        if style.margin > 0 {
            output.push_str(&format!(
                "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                total_width,
                total_height,
                style.resolved_margin_fill()
            ));
            output.push_str(&format!(
                "<g transform=\"translate({},{})\">\n",
                style.margin, style.margin
            ));
        }

        output.push_str(&render_window(style));

        output.push_str(&format!(
            "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {:.1} {:.1}\" overflow=\"hidden\">\n",
            layout.inner_x,
            layout.inner_y,
            layout.inner_width,
            layout.inner_height,
            layout.view_box_width(),
            layout.view_box_height()
        ));

        let text = TextStyle {
            font_family: &style.font_family,
            font_size,
            theme: &self.config.theme,
        };
        let baseline_rows = processed.registry.max_rows().max(MIN_BASELINE_ROWS);
        output.push_str(&render_styles(
            &processed.timeline,
            &layout,
            text,
            duration,
            baseline_rows,
        ));
        output.push_str(&SymbolTable::new(&layout).render_defs());

        output.push_str("<g class=\"animation-container\">\n");
        let groups: Vec<String> = processed
            .registry
            .states()
            .par_iter()
            .enumerate()
            .map(|(index, state)| render_state(index, state, &layout))
            .collect();
        for group in &groups {
            output.push_str(group);
        }
        output.push_str("</g>\n");
        output.push_str("</svg>\n");

        if style.margin > 0 {
            output.push_str("</g>\n");
        }
        output.push_str("</svg>\n");

        tracing::debug!(
            frames = frames.len(),
            states = processed.registry.len(),
            bytes = output.len(),
            "generated svg"
        );
        output
    }
}

/// Cell metrics from the first frame, or estimated from the font size.
fn char_metrics(frames: &[Frame], font_size: f64) -> CharMetrics {
    frames
        .first()
        .map(|f| f.metrics)
        .filter(CharMetrics::is_measured)
        .unwrap_or_else(|| CharMetrics::fallback(font_size))
}

/// Configured duration, else the capture's timestamp span, else one second.
fn resolve_duration(configured: Option<f64>, frames: &[Frame]) -> f64 {
    if let Some(secs) = configured.filter(|d| d.is_finite() && *d > 0.0) {
        return secs;
    }
    match (frames.first(), frames.last()) {
        (Some(first), Some(last)) if last.timestamp - first.timestamp > 0.0 => {
            last.timestamp - first.timestamp
        }
        _ => DEFAULT_DURATION_SECS,
    }
}
