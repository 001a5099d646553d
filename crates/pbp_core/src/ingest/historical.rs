use serde::Deserialize;

use crate::models::play::{quarter_len_s, FieldPosition, PlayRecord, PlayType, OVERTIME_QUARTER};

/// One play from the reconciled historical feed.
///
/// The clock arrives as seconds elapsed within the quarter and the yard
/// line as distance from the opponent goal (`yardline_100`). Scoring and
/// turnover arrive as separate per-cause flags and are folded into the
/// canonical booleans here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoricalPlay {
    #[serde(default)]
    pub play_id: Option<u64>,
    #[serde(default)]
    pub qtr: Option<u8>,
    /// Seconds elapsed within the quarter.
    #[serde(default)]
    pub sec_elapsed: Option<u16>,
    #[serde(default)]
    pub posteam: Option<String>,
    /// Side of the field the ball sits on. Redundant with `yardline_100`,
    /// which already orients relative to the possessing team; accepted so
    /// records carrying it still deserialize.
    #[serde(default)]
    pub side_of_field: Option<String>,
    #[serde(default)]
    pub down: Option<u8>,
    #[serde(default)]
    pub ydstogo: Option<u8>,
    /// Yards from the opponent goal line (1..=99 on normal snaps).
    #[serde(default)]
    pub yardline_100: Option<u8>,
    #[serde(default)]
    pub play_type: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub yards_gained: i16,
    #[serde(default)]
    pub touchdown: bool,
    #[serde(default)]
    pub safety: bool,
    #[serde(default)]
    pub interception: bool,
    #[serde(default)]
    pub fumble_lost: bool,
    #[serde(default)]
    pub first_down: bool,
    #[serde(default)]
    pub penalty: bool,
    #[serde(default)]
    pub penalty_yards: i16,
    #[serde(default)]
    pub epa: Option<f64>,
}

impl HistoricalPlay {
    /// Canonicalize, or drop with a warning when a mandatory field is
    /// missing.
    pub fn into_play(self) -> Option<PlayRecord> {
        let Some(sequence) = self.play_id else {
            log::warn!("dropping historical play without play_id: {:?}", self.desc);
            return None;
        };
        let Some(quarter) = self.qtr else {
            log::warn!("dropping historical play {} without qtr", sequence);
            return None;
        };
        if !(1..=OVERTIME_QUARTER).contains(&quarter) {
            log::warn!("dropping historical play {} with out-of-range qtr {}", sequence, quarter);
            return None;
        }

        // Elapsed-seconds clock reconciles to remaining; an elapsed value
        // past the quarter length clamps to 0:00 rather than dropping.
        let clock_remaining_s = self
            .sec_elapsed
            .map(|elapsed| quarter_len_s(quarter).saturating_sub(elapsed));

        let field_position = self
            .yardline_100
            .map(|from_opp_goal| FieldPosition::from_absolute(100_u8.saturating_sub(from_opp_goal)));

        let play_type = self
            .play_type
            .as_deref()
            .map(PlayType::parse)
            .unwrap_or_else(|| PlayType::Other("unknown".to_string()));

        Some(PlayRecord {
            sequence,
            quarter,
            clock_remaining_s,
            team: self.posteam,
            down: self.down,
            yards_to_go: self.ydstogo,
            field_position,
            play_type,
            description: self.desc.unwrap_or_default(),
            yards_gained: self.yards_gained,
            scoring: self.touchdown || self.safety,
            turnover: self.interception || self.fumble_lost,
            first_down: self.first_down,
            penalty: self.penalty,
            penalty_yards: self.penalty_yards,
            epa: self.epa,
        })
    }
}
