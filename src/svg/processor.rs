//! Frame deduplication and timeline construction.
//!
//! **Algorithm**:
//! 1. Fingerprint each frame's normalized content
//! 2. Intern the state in the registry (first occurrence wins the index)
//! 3. Record a timeline stop at the frame's position along the loop
//! 4. Hand registry and timeline to the configured [`StateCompactor`]

use super::frame::Frame;
use super::state::{KeyframeStop, StateRegistry, TerminalState, Timeline};

/// Registry and timeline produced from one frame sequence.
#[derive(Debug, Clone, Default)]
pub struct ProcessedFrames {
    pub registry: StateRegistry,
    pub timeline: Timeline,
}

/// Post-dedup compaction pass over the processed frames.
///
/// Implementations may merge near-duplicate states (for example with delta
/// encoding). They must leave one timeline stop per input frame and keep
/// every stop pointing at a valid registry index.
pub trait StateCompactor: Send + Sync {
    fn compact(&self, processed: &mut ProcessedFrames);
}

/// Leaves exact-match deduplication as the only compaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompaction;

impl StateCompactor for NoCompaction {
    fn compact(&self, _processed: &mut ProcessedFrames) {}
}

/// Turns an ordered frame capture into unique states plus a timeline.
pub struct FrameProcessor<'a> {
    compactor: &'a dyn StateCompactor,
}

impl Default for FrameProcessor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FrameProcessor<'a> {
    /// Processor with no compaction beyond exact deduplication.
    pub fn new() -> Self {
        Self {
            compactor: &NoCompaction,
        }
    }

    /// Processor that runs `compactor` after deduplication.
    pub fn with_compactor(compactor: &'a dyn StateCompactor) -> Self {
        Self { compactor }
    }

    pub fn process(&self, frames: &[Frame]) -> ProcessedFrames {
        let mut processed = ProcessedFrames::default();
        let total = frames.len();

        if let Some(first) = frames.first() {
            let mismatched = frames
                .iter()
                .filter(|f| f.metrics != first.metrics)
                .count();
            if mismatched > 0 {
                tracing::warn!(
                    mismatched,
                    "frames report differing character metrics; using the first frame's"
                );
            }
        }

        for (i, frame) in frames.iter().enumerate() {
            let state_index = processed.registry.intern(TerminalState::from_frame(frame));
            processed.timeline.push(KeyframeStop {
                percentage: Timeline::percentage_for(i, total),
                state_index,
            });
        }

        self.compactor.compact(&mut processed);

        tracing::debug!(
            frames = total,
            states = processed.registry.len(),
            "deduplicated terminal frames"
        );
        processed
    }
}
