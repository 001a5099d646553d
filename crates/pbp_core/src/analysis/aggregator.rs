//! Per-drive metric aggregation.
//!
//! Totals are computed over scrimmage plays only: kickoff, punt,
//! extra-point and two-point snaps are excluded so special-teams yardage
//! never pollutes offensive drive totals. Everything else (field position,
//! clocks, first downs, penalties) reads the full owned play list.

use crate::models::drive::{Drive, DriveOutcome};
use crate::models::play::{quarter_len_s, PlayRecord};

use super::segmenter::RawDrive;

/// Build the enriched drive from a segmented possession and its outcome.
pub fn aggregate(number: u32, raw: RawDrive, outcome: DriveOutcome) -> Drive {
    let mut total_yards = 0i32;
    let mut play_count = 0u32;
    let mut first_downs = 0u32;
    let mut penalty_count = 0u32;
    let mut penalty_yards = 0i32;
    let mut red_zone = false;

    for play in &raw.plays {
        if play.play_type.is_scrimmage() {
            total_yards += i32::from(play.yards_gained);
            play_count += 1;
        }
        if play.first_down {
            first_downs += 1;
        }
        if play.penalty {
            penalty_count += 1;
            penalty_yards += i32::from(play.penalty_yards);
        }
        if play.field_position.is_some_and(|pos| pos.is_red_zone()) {
            red_zone = true;
        }
    }

    let first = raw.plays.first();
    let last = raw.plays.last();
    let elapsed_s = match (first, last) {
        (Some(first), Some(last)) => elapsed_between(first, last),
        _ => None,
    };

    Drive {
        number,
        team: raw.team,
        outcome,
        total_yards,
        play_count,
        first_downs,
        penalty_count,
        penalty_yards,
        red_zone,
        start_quarter: first.map(|p| p.quarter).unwrap_or(1),
        end_quarter: last.map(|p| p.quarter).unwrap_or(1),
        start_clock_s: first.and_then(|p| p.clock_remaining_s),
        end_clock_s: last.and_then(|p| p.clock_remaining_s),
        start_position: first.and_then(|p| p.field_position),
        end_position: last.and_then(|p| p.field_position),
        elapsed_s,
        plays: raw.plays,
    }
}

/// Game-clock seconds between two plays, wrapping across quarter
/// boundaries: the remainder of the start quarter, any full quarters in
/// between, and the consumed part of the end quarter.
fn elapsed_between(first: &PlayRecord, last: &PlayRecord) -> Option<u32> {
    let start = first.clock_remaining_s?;
    let end = last.clock_remaining_s?;

    if first.quarter >= last.quarter {
        return Some(u32::from(start.saturating_sub(end)));
    }

    let mut elapsed = u32::from(start);
    for quarter in (first.quarter + 1)..last.quarter {
        elapsed += u32::from(quarter_len_s(quarter));
    }
    elapsed += u32::from(quarter_len_s(last.quarter).saturating_sub(end));
    Some(elapsed)
}
