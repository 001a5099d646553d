//! Drive reconstruction over the canonical play list.
//!
//! ## Submodules
//!
//! - `segmenter` - possession/kickoff boundary detection (one forward pass)
//! - `classifier` - ordered terminal-outcome rules, first match wins
//! - `aggregator` - per-drive metrics (yards, counts, clocks, field position)
//!
//! `compute_drives` chains the three. It is a pure fold over the input
//! snapshot: no shared or persisted state, so re-running on a longer play
//! list during live polling always yields a consistent result.

pub mod aggregator;
pub mod classifier;
pub mod segmenter;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aggregator::aggregate;
pub use classifier::classify;
pub use segmenter::{segment, RawDrive};

use crate::models::drive::{Drive, GameStatus};
use crate::models::play::PlayRecord;

/// Reconstruct the full drive list for one game.
///
/// Empty input yields an empty list; nothing here errors. Drive numbers are
/// 1-based, contiguous, chronological.
pub fn compute_drives(plays: &[PlayRecord], status: GameStatus) -> Vec<Drive> {
    let raw_drives = segment(plays);
    let last_index = raw_drives.len().saturating_sub(1);

    raw_drives
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let outcome = classify(&raw, index == last_index, status);
            aggregate(index as u32 + 1, raw, outcome)
        })
        .collect()
}
