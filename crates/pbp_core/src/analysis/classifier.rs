//! Drive outcome classification.
//!
//! A deterministic, ordered rule list evaluated per drive; the first rule
//! that matches wins. The ordering is load-bearing: a play flagged both
//! scoring and turnover classifies as the score because the scoring rule
//! runs first. Each rule is a named function so precedence stays auditable
//! and each rule is testable on its own.

use crate::models::drive::{DriveOutcome, GameStatus};
use crate::models::play::{PlayRecord, PlayType};

use super::segmenter::RawDrive;

/// Quarters at or past this index end the game when the clock runs out.
const FINAL_QUARTER: u8 = 4;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// Assign the drive its terminal outcome.
///
/// `is_last_drive` marks the chronologically last drive of the game;
/// together with `status` it selects the rule-8 default ("In Progress"
/// only for the open drive of a live game).
pub fn classify(drive: &RawDrive, is_last_drive: bool, status: GameStatus) -> DriveOutcome {
    let Some(last) = drive.plays.last() else {
        // Segmenter never emits an empty drive; fail soft if one appears.
        return default_outcome(is_last_drive, status);
    };

    score_rule(drive)
        .or_else(|| field_goal_rule(last))
        .or_else(|| turnover_rule(drive))
        .or_else(|| punt_rule(last))
        .or_else(|| downs_rule(last))
        .or_else(|| clock_rule(last))
        .or_else(|| kneel_rule(last))
        .unwrap_or_else(|| default_outcome(is_last_drive, status))
}

/// Rule 1: any scoring-flagged play ends the drive in points. A safety
/// keyword in that play's description overrides the touchdown reading.
fn score_rule(drive: &RawDrive) -> Option<DriveOutcome> {
    let scoring = drive.plays.iter().find(|play| play.scoring)?;
    if contains_ci(&scoring.description, "safety") {
        Some(DriveOutcome::Safety)
    } else {
        Some(DriveOutcome::Touchdown)
    }
}

/// Rule 2: a field-goal attempt as the last play. Miss indicators are
/// checked before made indicators ("no good" contains "good").
fn field_goal_rule(last: &PlayRecord) -> Option<DriveOutcome> {
    if last.play_type != PlayType::FieldGoal {
        return None;
    }
    Some(if field_goal_made(&last.description) {
        DriveOutcome::FieldGoal
    } else {
        DriveOutcome::MissedFieldGoal
    })
}

fn field_goal_made(description: &str) -> bool {
    const MISS_INDICATORS: &[&str] = &["no good", "blocked", "missed", "wide left", "wide right"];
    const MADE_INDICATORS: &[&str] = &["good", "made"];

    if MISS_INDICATORS.iter().any(|kw| contains_ci(description, kw)) {
        return false;
    }
    MADE_INDICATORS.iter().any(|kw| contains_ci(description, kw))
}

/// Rule 3: any turnover-flagged play, refined by description keywords. A
/// fumble the possessing team recovered itself is excluded.
fn turnover_rule(drive: &RawDrive) -> Option<DriveOutcome> {
    let turnover = drive
        .plays
        .iter()
        .find(|play| play.turnover && !own_recovery(play, drive.team.as_deref()))?;

    if contains_ci(&turnover.description, "intercept") {
        Some(DriveOutcome::Interception)
    } else if contains_ci(&turnover.description, "fumble") {
        Some(DriveOutcome::Fumble)
    } else {
        Some(DriveOutcome::Turnover)
    }
}

/// Fumble recovered by the possessing team, detected by matching the team
/// abbreviation inside the free-text description. Fragile by construction;
/// kept as one function so a structured-field fix replaces one call site.
fn own_recovery(play: &PlayRecord, drive_team: Option<&str>) -> bool {
    let Some(team) = drive_team else {
        return false;
    };
    contains_ci(&play.description, "fumble")
        && contains_ci(&play.description, &format!("recovered by {}", team.to_ascii_lowercase()))
}

/// Rule 4: drive ends on a punt.
fn punt_rule(last: &PlayRecord) -> Option<DriveOutcome> {
    (last.play_type == PlayType::Punt).then_some(DriveOutcome::Punt)
}

/// Rule 5: failed fourth down, no score or turnover on the play.
fn downs_rule(last: &PlayRecord) -> Option<DriveOutcome> {
    let short_of_line = last
        .yards_to_go
        .map(|to_go| i32::from(last.yards_gained) < i32::from(to_go))
        .unwrap_or(false);
    (last.down == Some(4) && short_of_line && !last.scoring && !last.turnover)
        .then_some(DriveOutcome::TurnoverOnDowns)
}

/// Rule 6: clock exhaustion, by keyword or a 0:00 clock, mapped through the
/// quarter the drive ended in.
fn clock_rule(last: &PlayRecord) -> Option<DriveOutcome> {
    const CLOCK_KEYWORDS: &[&str] =
        &["end of quarter", "end quarter", "end of half", "end of game", "end game"];

    let exhausted = last.clock_remaining_s == Some(0)
        || CLOCK_KEYWORDS.iter().any(|kw| contains_ci(&last.description, kw));
    if !exhausted {
        return None;
    }

    Some(match last.quarter {
        2 => DriveOutcome::EndOfHalf,
        q if q >= FINAL_QUARTER => DriveOutcome::EndOfGame,
        _ => DriveOutcome::EndOfQuarter,
    })
}

/// Rule 7: kneel-down to close the drive.
fn kneel_rule(last: &PlayRecord) -> Option<DriveOutcome> {
    (last.play_type == PlayType::Kneel).then_some(DriveOutcome::Kneel)
}

/// Rule 8: the default. "In Progress" is valid only for the open last
/// drive of a live game.
fn default_outcome(is_last_drive: bool, status: GameStatus) -> DriveOutcome {
    if is_last_drive && status == GameStatus::Live {
        DriveOutcome::InProgress
    } else {
        DriveOutcome::DriveComplete
    }
}
