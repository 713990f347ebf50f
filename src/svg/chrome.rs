//! Terminal window chrome: background, title bar and window controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::StyleOptions;
use crate::error::TermsvgError;

use super::escape::escape;

const DARWIN_COLORS: [&str; 3] = ["#ff5f58", "#ffbd2e", "#18c132"];
const CONTROL_GRAY: &str = "#888";
const WINDOWS_GRAY: &str = "#999";

/// Title bar variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowBar {
    /// No title bar
    #[default]
    None,
    /// macOS traffic lights
    Darwin,
    /// Minimize, maximize and close glyphs on the right
    Windows,
    /// Three gray filled circles
    Filled,
    /// Three gray outlined circles
    Outline,
}

impl WindowBar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Filled => "filled",
            Self::Outline => "outline",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for WindowBar {
    type Err = TermsvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "darwin" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            "filled" => Ok(Self::Filled),
            "outline" => Ok(Self::Outline),
            _ => Err(TermsvgError::UnknownWindowBar(s.to_string())),
        }
    }
}

impl TryFrom<String> for WindowBar {
    type Error = TermsvgError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowBar> for String {
    fn from(bar: WindowBar) -> Self {
        bar.as_str().to_string()
    }
}

impl fmt::Display for WindowBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window background plus the title bar when one is configured.
pub fn render_window(style: &StyleOptions) -> String {
    let mut output = format!(
        "<rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>\n",
        style.width,
        style.height,
        style.resolved_border_radius(),
        style.resolved_background()
    );
    if style.window_bar.is_visible() {
        output.push_str(&render_window_bar(style));
    }
    output
}

/// The `window-bar` group: bar background, controls and title.
pub fn render_window_bar(style: &StyleOptions) -> String {
    let width = i64::from(style.width);
    let bar = i64::from(style.window_bar_size);
    let radius = i64::from(style.resolved_border_radius());

    let mut output = String::from("<g id=\"window-bar\">\n");

    // Rounded top corners, square bottom edge
    output.push_str(&format!(
        "<path d=\"M {r},0 L {},0 Q {w},0 {w},{r} L {w},{b} L 0,{b} L 0,{r} Q 0,0 {r},0 Z\" fill=\"{}\"/>\n",
        width - radius,
        style.resolved_bar_color(),
        r = radius,
        w = width,
        b = bar,
    ));

    let controls = match style.window_bar {
        WindowBar::None => String::new(),
        WindowBar::Darwin => darwin_controls(bar),
        WindowBar::Windows => windows_controls(width, bar),
        WindowBar::Filled => filled_controls(bar),
        WindowBar::Outline => outline_controls(bar),
    };
    output.push_str(&controls);

    output.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{},monospace\" font-size=\"13\" fill=\"#cccccc\">Terminal</text>\n",
        width / 2,
        bar / 2 + 4,
        escape(&style.font_family)
    ));
    output.push_str("</g>\n");
    output
}

/// X centers of the three left-aligned control circles.
fn circle_centers() -> impl Iterator<Item = i64> {
    (0..3).map(|i| 20 + i * 20)
}

fn darwin_controls(bar: i64) -> String {
    circle_centers()
        .zip(DARWIN_COLORS)
        .map(|(x, color)| {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"{}\"/>\n",
                x,
                bar / 2,
                color
            )
        })
        .collect()
}

fn windows_controls(width: i64, bar: i64) -> String {
    let x = width - 20;
    let mid = bar / 2;
    format!(
        concat!(
            "<rect x=\"{}\" y=\"{}\" width=\"14\" height=\"2\" fill=\"{g}\"/>",
            "<rect x=\"{}\" y=\"{}\" width=\"12\" height=\"12\" fill=\"none\" stroke=\"{g}\" stroke-width=\"2\"/>",
            "<path d=\"M {},{} L {},{} M {},{} L {},{}\" stroke=\"{g}\" stroke-width=\"2\"/>\n"
        ),
        x - 50,
        mid - 1,
        x - 30,
        mid - 6,
        x - 14,
        mid - 6,
        x - 2,
        mid + 6,
        x - 2,
        mid - 6,
        x - 14,
        mid + 6,
        g = WINDOWS_GRAY,
    )
}

fn filled_controls(bar: i64) -> String {
    let mut output: String = circle_centers()
        .map(|x| {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"{}\"/>",
                x,
                bar / 2,
                CONTROL_GRAY
            )
        })
        .collect();
    output.push('\n');
    output
}

fn outline_controls(bar: i64) -> String {
    let mut output: String = circle_centers()
        .map(|x| {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
                x,
                bar / 2,
                CONTROL_GRAY
            )
        })
        .collect();
    output.push('\n');
    output
}
