//! The `<style>` block: slide keyframes, text classes and cursor blink.
//!
//! Repeated presentation (row baselines, colors) lives in classes so each
//! state's markup stays small.

use crate::theme::Theme;

use super::escape::escape;
use super::layout::Layout;
use super::state::Timeline;

/// Inputs for the style block that are not geometry.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font_family: &'a str,
    pub font_size: f64,
    pub theme: &'a Theme,
}

/// Render the complete `<style>` element.
///
/// `baseline_rows` is the number of `.yN` classes to emit.
pub fn render_styles(
    timeline: &Timeline,
    layout: &Layout,
    text: TextStyle<'_>,
    duration: f64,
    baseline_rows: usize,
) -> String {
    let mut output = String::from("<style>\n");

    output.push_str(&render_slide_keyframes(timeline));
    output.push_str("\n\n");

    output.push_str(".animation-container {\n");
    output.push_str(&format!(
        "  animation: slide {:.2}s steps(1, end) infinite;\n",
        duration
    ));
    output.push_str("}\n\n");

    output.push_str(&format!(
        ".f {{ fill: {}; font-family: {}, monospace; font-size: {:.2}px; }}\n",
        text.theme.foreground,
        escape(text.font_family),
        text.font_size
    ));

    for row in 0..baseline_rows {
        output.push_str(&format!(".y{} {{ y: {:.3}; }}\n", row, layout.baseline(row)));
    }

    for (name, color) in text.theme.named_colors() {
        output.push_str(&format!(".{} {{ fill: {}; }}\n", name, color));
    }

    output.push_str("@keyframes blink { 0%, 49% { opacity: 1; } 50%, 100% { opacity: 0; } }\n");
    output.push_str(&format!(".cursor {{ fill: {}; }}\n", text.theme.cursor));

    output.push_str("</style>\n");
    output
}

/// `@keyframes slide`, one stop per visible state change.
pub fn render_slide_keyframes(timeline: &Timeline) -> String {
    let stops = timeline.keyframe_changes();
    tracing::debug!(
        timeline = timeline.len(),
        keyframes = stops.len(),
        "built slide keyframes"
    );

    let mut output = String::from("@keyframes slide {\n");
    for stop in stops {
        let offset = 0.0 - Layout::state_offset(stop.state_index);
        output.push_str(&format!(
            "  {:.2}% {{ transform: translateX({:.1}px); }}\n",
            stop.percentage, offset
        ));
    }
    output.push('}');
    output
}
