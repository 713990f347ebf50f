//! End-to-end generation tests against fixture captures.

use termsvg::svg::{FrameProcessor, StateCompactor, ProcessedFrames};
use termsvg::{Config, Frame, StyleOptions, SvgGenerator, WindowBar};

use crate::helpers::load_fixture_frames;

fn generate(frames: &[Frame]) -> String {
    SvgGenerator::new(Config::default()).generate(frames)
}

// ============================================================================
// Deduplication
// ============================================================================

#[test]
fn session_collapses_trailing_space_redraw() {
    let frames = load_fixture_frames("session.json");
    let processed = FrameProcessor::new().process(&frames);

    assert_eq!(frames.len(), 4);
    assert_eq!(processed.registry.len(), 3);

    let indices: Vec<_> = processed
        .timeline
        .stops()
        .iter()
        .map(|s| s.state_index)
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 2]);
}

#[test]
fn registry_size_matches_distinct_screens() {
    let screens = ["a", "b", "a", "c", "c", "b", "d"];
    let frames: Vec<_> = screens.iter().map(|s| Frame::new([*s], (0, 0))).collect();

    let processed = FrameProcessor::new().process(&frames);

    let repeats = screens
        .iter()
        .enumerate()
        .filter(|(i, s)| screens[..*i].contains(s))
        .count();
    assert_eq!(processed.registry.len(), frames.len() - repeats);
    assert_eq!(processed.timeline.len(), frames.len());
}

#[test]
fn cursor_movement_alone_creates_new_state() {
    let frames = [Frame::new(["$ "], (2, 0)), Frame::new(["$ "], (3, 0))];
    let processed = FrameProcessor::new().process(&frames);
    assert_eq!(processed.registry.len(), 2);
}

// ============================================================================
// Document output
// ============================================================================

#[test]
fn session_keyframes_skip_repeated_final_state() {
    let svg = generate(&load_fixture_frames("session.json"));

    assert!(svg.contains("  0.00% { transform: translateX(0.0px); }"));
    assert!(svg.contains("  33.33% { transform: translateX(-100.0px); }"));
    assert!(svg.contains("  66.67% { transform: translateX(-200.0px); }"));
    assert!(!svg.contains("100.00%"));
}

#[test]
fn session_duration_comes_from_timestamps() {
    let svg = generate(&load_fixture_frames("session.json"));
    assert!(svg.contains("animation: slide 1.50s steps(1, end) infinite;"));
}

#[test]
fn session_references_prompt_and_cursor_symbols() {
    let svg = generate(&load_fixture_frames("session.json"));

    assert_eq!(svg.matches("<use href=\"#prompt\"").count(), 2);
    assert_eq!(svg.matches("<use href=\"#cursor-sym\"").count(), 3);
    assert_eq!(svg.matches("<symbol id=\"cursor-sym\">").count(), 1);
    assert!(svg.contains("<text x=\"0\" class=\"f y0\">&gt; echo hi</text>"));
}

#[test]
fn output_grows_with_states_not_frames() {
    let one = vec![Frame::new(["same screen"], (0, 0))];
    let many = vec![Frame::new(["same screen"], (0, 0)); 500];

    let small = generate(&one);
    let large = generate(&many);

    // Only the keyframe track differs, and repeated stops are collapsed
    assert_eq!(small.len(), large.len());
}

#[test]
fn configured_duration_overrides_timestamps() {
    let mut config = Config::default();
    config.style.duration = Some(12.0);

    let svg = SvgGenerator::new(config).generate(&load_fixture_frames("session.json"));
    assert!(svg.contains("animation: slide 12.00s"));
}

#[test]
fn window_bar_toggles_bar_group() {
    let frames = [Frame::new(["Test"], (0, 0))];

    for bar in [WindowBar::Darwin, WindowBar::Windows, WindowBar::Filled, WindowBar::Outline] {
        let config = Config {
            style: StyleOptions {
                window_bar: bar,
                ..StyleOptions::default()
            },
            ..Config::default()
        };
        let svg = SvgGenerator::new(config).generate(&frames);
        assert!(svg.contains("<g id=\"window-bar\">"), "{}", bar);
    }

    let config = Config {
        style: StyleOptions {
            window_bar: WindowBar::None,
            ..StyleOptions::default()
        },
        ..Config::default()
    };
    let svg = SvgGenerator::new(config).generate(&frames);
    assert!(!svg.contains("window-bar"));
}

#[test]
fn segmented_line_matches_character_grid() {
    let mut config = Config::default();
    config.style.width = 240;
    config.style.padding = 20;
    let frames = [Frame {
        metrics: termsvg::svg::CharMetrics {
            char_width: 10.0,
            char_height: 20.0,
            letter_spacing: 0.0,
        },
        ..Frame::new(["  hi there  "], (0, 0))
    }];

    let svg = SvgGenerator::new(config).generate(&frames);

    // inner width 200px -> 0.5 units per pixel, 5 units per column
    assert!(svg.contains(
        "<text class=\"f y0\"><tspan x=\"10.000\">hi</tspan><tspan x=\"25.000\">there</tspan></text>"
    ));
}

struct DropNothing;

impl StateCompactor for DropNothing {
    fn compact(&self, processed: &mut ProcessedFrames) {
        assert_eq!(processed.timeline.len(), 4);
    }
}

#[test]
fn custom_compactor_sees_processed_frames() {
    let generator = SvgGenerator::new(Config::default()).with_compactor(DropNothing);
    let processed = generator.process(&load_fixture_frames("session.json"));
    assert_eq!(processed.registry.len(), 3);
}
