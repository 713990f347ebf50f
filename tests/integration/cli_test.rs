//! Integration tests for the termsvg CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, temp_fixture, termsvg};

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn render_writes_svg_file() {
    let (dir, frames) = temp_fixture("session.json");
    let output = dir.path().join("session.svg");

    termsvg(dir.path())
        .args(["render"])
        .arg(&frames)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("@keyframes slide"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn render_without_output_prints_to_stdout() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .arg("render")
        .arg(fixtures_dir().join("session.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("<g class=\"animation-container\">"));
}

#[test]
fn render_applies_overrides() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .arg("render")
        .arg(fixtures_dir().join("session.json"))
        .args(["--window-bar", "none", "--width", "640", "--duration", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window-bar").not())
        .stdout(predicate::str::contains("width=\"640\""))
        .stdout(predicate::str::contains("animation: slide 3.00s"));
}

#[test]
fn render_reads_explicit_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        "[style]\nmargin = 10\nmargin_fill = \"#ff0000\"\n\n[theme]\nforeground = \"#abcdef\"\n",
    )
    .unwrap();

    termsvg(home.path())
        .arg("render")
        .arg(fixtures_dir().join("session.json"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"820\" height=\"620\""))
        .stdout(predicate::str::contains("fill=\"#ff0000\""))
        .stdout(predicate::str::contains("fill: #abcdef;"));
}

#[test]
fn render_missing_frames_file_fails_with_path() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .args(["render", "nonexistent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent.json"));
}

#[test]
fn render_invalid_frames_fails() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .arg("render")
        .arg(fixtures_dir().join("invalid.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid frame data"));
}

#[test]
fn render_unknown_theme_fails() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .arg("render")
        .arg(fixtures_dir().join("session.json"))
        .args(["--theme", "neon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}

#[test]
fn render_without_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .arg("render")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FRAMES>"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_path_points_into_config_dir() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termsvg"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[style]"))
        .stdout(predicate::str::contains("window_bar = \"darwin\""))
        .stdout(predicate::str::contains("[theme]"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    termsvg(home.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    termsvg(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();

    termsvg(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termsvg"));
}
