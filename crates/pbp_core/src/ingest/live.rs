use serde::Deserialize;

use crate::models::play::{parse_clock, FieldPosition, PlayRecord, PlayType, OVERTIME_QUARTER};

/// One play from the low-latency in-progress feed.
///
/// The clock arrives as remaining `"mm:ss"` text and the yard line is
/// side-relative when `yard_side` is present. Unknown fields are rejected so
/// the untagged `SourceRecord` union resolves by shape, not by luck.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LivePlay {
    #[serde(default)]
    pub sequence: Option<u64>,
    #[serde(default)]
    pub period: Option<u8>,
    /// Remaining time in the quarter, `"mm:ss"`.
    #[serde(default)]
    pub clock: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub down: Option<u8>,
    #[serde(default)]
    pub distance: Option<u8>,
    /// 0..=50 when `yard_side` is present, absolute 0..=100 otherwise.
    #[serde(default)]
    pub yard_line: Option<u8>,
    #[serde(default)]
    pub yard_side: Option<String>,
    #[serde(default)]
    pub play_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub stat_yards: i16,
    #[serde(default)]
    pub scoring_play: bool,
    #[serde(default)]
    pub turnover: bool,
    #[serde(default)]
    pub first_down: bool,
    #[serde(default)]
    pub penalty: bool,
    #[serde(default)]
    pub penalty_yards: i16,
    #[serde(default)]
    pub epa: Option<f64>,
}

impl LivePlay {
    /// Canonicalize, or drop with a warning when a mandatory field is
    /// missing.
    pub fn into_play(self) -> Option<PlayRecord> {
        let Some(sequence) = self.sequence else {
            log::warn!("dropping live play without sequence: {:?}", self.text);
            return None;
        };
        let Some(quarter) = self.period else {
            log::warn!("dropping live play {} without period", sequence);
            return None;
        };
        if !(1..=OVERTIME_QUARTER).contains(&quarter) {
            log::warn!("dropping live play {} with out-of-range period {}", sequence, quarter);
            return None;
        }

        let clock_remaining_s = match self.clock.as_deref() {
            Some(text) => {
                let parsed = parse_clock(text);
                if parsed.is_none() {
                    log::debug!("live play {}: unparseable clock {:?}", sequence, text);
                }
                parsed
            }
            None => None,
        };

        let field_position = self.field_position();
        let play_type = self
            .play_type
            .as_deref()
            .map(PlayType::parse)
            .unwrap_or_else(|| PlayType::Other("unknown".to_string()));

        Some(PlayRecord {
            sequence,
            quarter,
            clock_remaining_s,
            team: self.team,
            down: self.down,
            yards_to_go: self.distance,
            field_position,
            play_type,
            description: self.text.unwrap_or_default(),
            yards_gained: self.stat_yards,
            scoring: self.scoring_play,
            turnover: self.turnover,
            first_down: self.first_down,
            penalty: self.penalty,
            penalty_yards: self.penalty_yards,
            epa: self.epa,
        })
    }

    /// Side indicator wins when both it and the possession team are known;
    /// otherwise the absolute <= 50 convention applies.
    fn field_position(&self) -> Option<FieldPosition> {
        let yard = self.yard_line?;
        match (self.yard_side.as_deref(), self.team.as_deref()) {
            (Some(side), Some(team)) => {
                if side.eq_ignore_ascii_case(team) {
                    Some(FieldPosition::Own(yard))
                } else {
                    Some(FieldPosition::Opp(yard))
                }
            }
            _ => Some(FieldPosition::from_absolute(yard)),
        }
    }
}
