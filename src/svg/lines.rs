//! Per-state text rendering.
//!
//! Each line becomes one `<text>` element. Lines with interior or leading
//! spaces are split into `<tspan>` runs placed at their column, so the markup
//! never carries runs of spaces.

use unicode_width::UnicodeWidthChar;

use super::escape::escape;
use super::layout::Layout;
use super::state::TerminalState;
use super::symbols::CommonSymbol;

/// A run of non-space characters and the display column it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub column: usize,
    pub text: &'a str,
}

/// Cells a character occupies. Control characters count as one cell.
fn cell_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

/// Split a line into runs of non-space characters.
pub fn text_runs(line: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut column = 0;
    let mut run_start: Option<(usize, usize)> = None;

    for (byte, c) in line.char_indices() {
        if c == ' ' {
            if let Some((start, start_col)) = run_start.take() {
                runs.push(TextRun {
                    column: start_col,
                    text: &line[start..byte],
                });
            }
        } else if run_start.is_none() {
            run_start = Some((byte, column));
        }
        column += cell_width(c);
    }

    if let Some((start, start_col)) = run_start {
        runs.push(TextRun {
            column: start_col,
            text: &line[start..],
        });
    }
    runs
}

/// Markup for one line, or `None` when the line is blank.
pub fn render_line(row: usize, line: &str, layout: &Layout) -> Option<String> {
    let line = line.trim_end_matches(' ');
    if line.trim().is_empty() {
        return None;
    }

    let whole_line = !line.starts_with(' ') && line.trim() == line;
    if whole_line {
        if Some(line) == CommonSymbol::Prompt.text() {
            return Some(format!(
                "<use href=\"#{}\" x=\"0\" class=\"y{}\"/>",
                CommonSymbol::Prompt.id(),
                row
            ));
        }
        return Some(format!(
            "<text x=\"0\" class=\"f y{}\">{}</text>",
            row,
            escape(line)
        ));
    }

    let mut output = format!("<text class=\"f y{}\">", row);
    for run in text_runs(line) {
        output.push_str(&format!(
            "<tspan x=\"{:.3}\">{}</tspan>",
            layout.column_x(run.column),
            escape(run.text)
        ));
    }
    output.push_str("</text>");
    Some(output)
}

/// The translated group for state `index`: its lines plus the cursor.
pub fn render_state(index: usize, state: &TerminalState, layout: &Layout) -> String {
    let mut output = format!(
        "<g transform=\"translate({:.1}, 0)\">\n",
        Layout::state_offset(index)
    );

    for (row, line) in state.lines.iter().enumerate() {
        if let Some(markup) = render_line(row, line, layout) {
            output.push_str(&markup);
            output.push('\n');
        }
    }

    if state.cursor_visible() {
        output.push_str(&format!(
            "<use href=\"#{}\" x=\"{:.3}\" y=\"{:.3}\"/>\n",
            CommonSymbol::Cursor.id(),
            state.cursor_pixel_x * layout.scale,
            state.cursor_pixel_y * layout.scale
        ));
    }

    output.push_str("</g>\n");
    output
}
