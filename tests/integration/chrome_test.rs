//! Snapshot of the window chrome markup.

use termsvg::svg::chrome::render_window_bar;
use termsvg::{StyleOptions, WindowBar};

#[test]
fn snapshot_darwin_window_bar() {
    let style = StyleOptions {
        width: 200,
        height: 100,
        font_family: "Menlo".to_string(),
        window_bar: WindowBar::Darwin,
        window_bar_size: 30,
        window_bar_color: "#2d2d2d".to_string(),
        border_radius: 5,
        ..StyleOptions::default()
    };
    insta::assert_snapshot!("darwin_window_bar", render_window_bar(&style));
}
