//! Drive segmentation: a single forward pass over the canonical play list.
//!
//! A new drive opens on the first non-marker play, on any kickoff, or on a
//! possession change that is not a special-teams continuation. Marker plays
//! (end-of-period records, timeouts) attach to no drive. Segmentation is a
//! pure fold, so re-running it on a longer snapshot of the same game is
//! always safe.

use crate::models::play::{PlayRecord, PlayType};

/// A segmented possession before classification and aggregation.
///
/// `plays` is non-empty and in input order. `team` stays `None` when no
/// play ever resolved possession (e.g. a drive of special-teams plays).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDrive {
    pub team: Option<String>,
    pub plays: Vec<PlayRecord>,
}

impl RawDrive {
    fn open(play: &PlayRecord) -> Self {
        let mut drive = RawDrive { team: None, plays: Vec::new() };
        drive.push(play);
        drive
    }

    fn push(&mut self, play: &PlayRecord) {
        // Tentative team: first non-special-teams play with known
        // possession. A kickoff's team is the kicking side, so it never
        // labels the drive it opens.
        if self.team.is_none() && !play.play_type.is_special_teams() {
            self.team = play.team.clone();
        }
        self.plays.push(play.clone());
    }

    /// Possession moved to a team other than ours, outside the
    /// special-teams plays that carry the other side's id without ending
    /// the possession.
    fn possession_changed(&self, play: &PlayRecord) -> bool {
        if play.play_type.is_special_teams() {
            return false;
        }
        match (&self.team, &play.team) {
            (Some(ours), Some(theirs)) => ours != theirs,
            _ => false,
        }
    }

    fn starts_new_drive(&self, play: &PlayRecord) -> bool {
        play.play_type == PlayType::Kickoff || self.possession_changed(play)
    }
}

/// Partition the ordered play list into chronological raw drives.
///
/// Every non-marker input play lands in exactly one output drive;
/// concatenating the drives' plays reconstructs the non-marker input
/// sequence.
pub fn segment(plays: &[PlayRecord]) -> Vec<RawDrive> {
    let mut drives = Vec::new();
    let mut current: Option<RawDrive> = None;

    for play in plays {
        if play.is_marker() {
            continue;
        }

        let boundary = current
            .as_ref()
            .is_some_and(|open| open.starts_new_drive(play));
        if boundary {
            if let Some(open) = current.take() {
                log::debug!(
                    "drive boundary at sequence {} ({} plays closed)",
                    play.sequence,
                    open.plays.len()
                );
                drives.push(open);
            }
        }

        match current.as_mut() {
            Some(open) => open.push(play),
            None => current = Some(RawDrive::open(play)),
        }
    }

    if let Some(open) = current.take() {
        drives.push(open);
    }
    drives
}
