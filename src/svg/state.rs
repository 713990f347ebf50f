//! Unique terminal states and the animation timeline.
//!
//! Frames that look identical (same right-trimmed lines, same cursor) collapse
//! into one [`TerminalState`]. The [`Timeline`] keeps one stop per frame so the
//! animation can replay the original sequence over the deduplicated states.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use super::frame::Frame;

/// A deduplicated screen: lines, cursor and the content fingerprint.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalState {
    pub lines: Vec<String>,
    pub cursor_x: i32,
    pub cursor_y: i32,
    pub cursor_pixel_x: f64,
    pub cursor_pixel_y: f64,
    /// Hex SHA-256 over the normalized content
    pub hash: String,
}

impl TerminalState {
    /// Build the state for a frame, computing its fingerprint.
    pub fn from_frame(frame: &Frame) -> Self {
        let mut state = Self {
            lines: frame.lines.clone(),
            cursor_x: frame.cursor_x,
            cursor_y: frame.cursor_y,
            cursor_pixel_x: frame.cursor_pixel_x,
            cursor_pixel_y: frame.cursor_pixel_y,
            hash: String::new(),
        };
        state.hash = hash_state(&state);
        state
    }

    /// Whether the cursor sits on one of this state's lines.
    pub fn cursor_visible(&self) -> bool {
        usize::try_from(self.cursor_y).is_ok_and(|row| row < self.lines.len())
    }
}

/// Fingerprint a state's lines and cursor.
///
/// Trailing spaces are ignored so redraws with different padding hash the
/// same. Pixel coordinates are compared at two decimal places.
pub fn hash_state(state: &TerminalState) -> String {
    let mut hasher = Sha256::new();
    for line in &state.lines {
        hasher.update(line.trim_end_matches(' ').as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(
        format!(
            "{},{},{:.2},{:.2}",
            state.cursor_x, state.cursor_y, state.cursor_pixel_x, state.cursor_pixel_y
        )
        .as_bytes(),
    );
    hex::encode(hasher.finalize())
}

/// Ordered set of unique states with a fingerprint index.
#[derive(Debug, Clone, Default)]
pub struct StateRegistry {
    states: Vec<TerminalState>,
    index: HashMap<String, usize>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `state`, inserting it if its fingerprint is new.
    pub fn intern(&mut self, state: TerminalState) -> usize {
        if let Some(&idx) = self.index.get(&state.hash) {
            return idx;
        }
        let idx = self.states.len();
        self.index.insert(state.hash.clone(), idx);
        self.states.push(state);
        idx
    }

    /// Index of the state with the given fingerprint.
    pub fn lookup(&self, hash: &str) -> Option<usize> {
        self.index.get(hash).copied()
    }

    pub fn get(&self, idx: usize) -> Option<&TerminalState> {
        self.states.get(idx)
    }

    pub fn states(&self) -> &[TerminalState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Tallest state in rows (0 for an empty registry).
    pub fn max_rows(&self) -> usize {
        self.states.iter().map(|s| s.lines.len()).max().unwrap_or(0)
    }
}

/// A point in the animation: which state is shown from `percentage` onward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeStop {
    pub percentage: f64,
    pub state_index: usize,
}

/// One stop per input frame, in capture order.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    stops: Vec<KeyframeStop>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage along the loop for frame `index` of `total`.
    ///
    /// A single frame sits at 0%.
    pub fn percentage_for(index: usize, total: usize) -> f64 {
        if total <= 1 {
            0.0
        } else {
            index as f64 / (total - 1) as f64 * 100.0
        }
    }

    pub fn push(&mut self, stop: KeyframeStop) {
        self.stops.push(stop);
    }

    pub fn stops(&self) -> &[KeyframeStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops that actually change what is on screen.
    ///
    /// A stop is kept only when both its state and its percentage differ from
    /// the last kept stop, so repeated states and duplicate percentages are
    /// dropped.
    pub fn keyframe_changes(&self) -> Vec<KeyframeStop> {
        let mut kept: Vec<KeyframeStop> = Vec::new();
        for stop in &self.stops {
            let changed = kept.last().map_or(true, |last| {
                last.state_index != stop.state_index && last.percentage != stop.percentage
            });
            if changed {
                kept.push(*stop);
            }
        }
        kept
    }
}
