//! Shared play fixtures for the analysis tests.

use crate::models::play::{PlayRecord, PlayType};

/// A neutral first-and-ten snap; tests mutate the fields they care about.
/// An empty team string means unknown possession.
pub(crate) fn make_play(sequence: u64, quarter: u8, team: &str, play_type: PlayType) -> PlayRecord {
    PlayRecord {
        sequence,
        quarter,
        clock_remaining_s: Some(600),
        team: if team.is_empty() { None } else { Some(team.to_string()) },
        down: Some(1),
        yards_to_go: Some(10),
        field_position: None,
        play_type,
        description: String::new(),
        yards_gained: 0,
        scoring: false,
        turnover: false,
        first_down: false,
        penalty: false,
        penalty_yards: 0,
        epa: None,
    }
}
