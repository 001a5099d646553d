use serde::{Deserialize, Serialize};

use super::play::{FieldPosition, PlayRecord};

/// Whether the game the plays came from is still being played.
///
/// Selects the default classification for the chronologically last drive:
/// a live game's open drive reads "In Progress", a final game's reads
/// "Drive Complete".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Live,
    Final,
}

/// Terminal outcome of a drive.
///
/// Serialized with the presentation-facing labels; the `Display` impl
/// matches the serde names exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum DriveOutcome {
    Touchdown,
    Safety,
    #[serde(rename = "Field Goal")]
    FieldGoal,
    #[serde(rename = "Missed Field Goal")]
    MissedFieldGoal,
    Interception,
    Fumble,
    Turnover,
    Punt,
    #[serde(rename = "Turnover on Downs")]
    TurnoverOnDowns,
    #[serde(rename = "End of Quarter")]
    EndOfQuarter,
    #[serde(rename = "End of Half")]
    EndOfHalf,
    #[serde(rename = "End of Game")]
    EndOfGame,
    Kneel,
    #[serde(rename = "Drive Complete")]
    DriveComplete,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl DriveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveOutcome::Touchdown => "Touchdown",
            DriveOutcome::Safety => "Safety",
            DriveOutcome::FieldGoal => "Field Goal",
            DriveOutcome::MissedFieldGoal => "Missed Field Goal",
            DriveOutcome::Interception => "Interception",
            DriveOutcome::Fumble => "Fumble",
            DriveOutcome::Turnover => "Turnover",
            DriveOutcome::Punt => "Punt",
            DriveOutcome::TurnoverOnDowns => "Turnover on Downs",
            DriveOutcome::EndOfQuarter => "End of Quarter",
            DriveOutcome::EndOfHalf => "End of Half",
            DriveOutcome::EndOfGame => "End of Game",
            DriveOutcome::Kneel => "Kneel",
            DriveOutcome::DriveComplete => "Drive Complete",
            DriveOutcome::InProgress => "In Progress",
        }
    }

    /// The drive ended with points for the possessing team.
    pub fn is_score(&self) -> bool {
        matches!(self, DriveOutcome::Touchdown | DriveOutcome::FieldGoal)
    }
}

impl std::fmt::Display for DriveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One possession, with its owned plays and derived metrics.
///
/// Recomputed fresh on every run; there is no persisted drive state to
/// invalidate when a longer play snapshot arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    /// 1-based, contiguous, chronological.
    pub number: u32,
    /// Possessing team abbreviation; `None` if never resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Non-empty, in input order. Each non-marker play belongs to exactly
    /// one drive.
    pub plays: Vec<PlayRecord>,
    pub outcome: DriveOutcome,
    /// Scrimmage yardage only; kickoff/punt/extra-point/two-point plays are
    /// excluded so special-teams returns never pollute offensive totals.
    pub total_yards: i32,
    /// Scrimmage play count (same filter as `total_yards`).
    pub play_count: u32,
    pub first_downs: u32,
    pub penalty_count: u32,
    pub penalty_yards: i32,
    /// Any snap at or inside the opponent 20.
    pub red_zone: bool,
    pub start_quarter: u8,
    pub end_quarter: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_clock_s: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_clock_s: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<FieldPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_position: Option<FieldPosition>,
    /// Game-clock seconds consumed between the first and last play,
    /// wrapping across quarter boundaries. `None` when either endpoint has
    /// no clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_s: Option<u32>,
}
