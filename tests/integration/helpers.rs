//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use termsvg::Frame;

/// Directory holding the JSON frame captures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("Failed to read fixture")
}

/// Parse a fixture file into frames.
pub fn load_fixture_frames(name: &str) -> Vec<Frame> {
    termsvg::svg::parse_frames(&load_fixture(name)).expect("Fixture should parse")
}

/// Copy a fixture into a fresh temp dir, returning the dir guard and file path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// termsvg binary with its config directory redirected into `home`.
pub fn termsvg(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("termsvg").expect("termsvg binary should build");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}
