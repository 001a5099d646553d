use serde::{Deserialize, Serialize};

/// Seconds in a regulation quarter.
pub const REGULATION_QUARTER_S: u16 = 900;

/// Seconds in an overtime period.
pub const OVERTIME_QUARTER_S: u16 = 600;

/// Quarter index of the (single) overtime period.
pub const OVERTIME_QUARTER: u8 = 5;

/// Length in seconds of the given quarter (1-4 regulation, 5 overtime).
pub fn quarter_len_s(quarter: u8) -> u16 {
    if quarter >= OVERTIME_QUARTER {
        OVERTIME_QUARTER_S
    } else {
        REGULATION_QUARTER_S
    }
}

/// Play category after normalization.
///
/// Closed vocabulary with a free-text fallback: both upstream feeds describe
/// play types as strings, and strings outside the known set land in
/// `Other` unchanged (lowercased) rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    Pass,
    Rush,
    Kickoff,
    Punt,
    FieldGoal,
    ExtraPoint,
    TwoPointConversion,
    Kneel,
    Spike,
    Penalty,
    /// Administrative marker: end of a quarter (non-snap record).
    EndQuarter,
    /// Administrative marker: end of the game (non-snap record).
    EndGame,
    /// Administrative marker: charged or official timeout.
    Timeout,
    Other(String),
}

impl PlayType {
    /// Map a raw feed string onto the closed vocabulary.
    ///
    /// Accepts both feeds' spellings case-insensitively; anything unknown
    /// becomes `Other`.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_ascii_lowercase();
        match token.as_str() {
            "pass" | "passing" | "sack" => PlayType::Pass,
            "rush" | "rushing" | "run" => PlayType::Rush,
            "kickoff" | "kick off" => PlayType::Kickoff,
            "punt" => PlayType::Punt,
            "field goal" | "field_goal" | "fieldgoal" => PlayType::FieldGoal,
            "extra point" | "extra_point" | "pat" => PlayType::ExtraPoint,
            "two point" | "two_point" | "two-point conversion" | "two point conversion" => {
                PlayType::TwoPointConversion
            }
            "kneel" | "qb kneel" | "qb_kneel" => PlayType::Kneel,
            "spike" | "qb spike" | "qb_spike" => PlayType::Spike,
            "penalty" | "no_play" | "no play" => PlayType::Penalty,
            "end of quarter" | "end quarter" | "end_quarter" | "end period" | "end_period"
            | "end of half" | "end_half" => PlayType::EndQuarter,
            "end of game" | "end game" | "end_game" => PlayType::EndGame,
            "timeout" | "official timeout" => PlayType::Timeout,
            _ => PlayType::Other(token),
        }
    }

    /// Label used for serialization and display.
    pub fn as_str(&self) -> &str {
        match self {
            PlayType::Pass => "pass",
            PlayType::Rush => "rush",
            PlayType::Kickoff => "kickoff",
            PlayType::Punt => "punt",
            PlayType::FieldGoal => "field goal",
            PlayType::ExtraPoint => "extra point",
            PlayType::TwoPointConversion => "two point conversion",
            PlayType::Kneel => "kneel",
            PlayType::Spike => "spike",
            PlayType::Penalty => "penalty",
            PlayType::EndQuarter => "end of quarter",
            PlayType::EndGame => "end of game",
            PlayType::Timeout => "timeout",
            PlayType::Other(s) => s,
        }
    }

    /// Non-snap administrative record; attached to no drive.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            PlayType::EndQuarter | PlayType::EndGame | PlayType::Timeout
        )
    }

    /// Special-teams play that never forces a possession-change boundary
    /// (kickoffs have a dedicated segmentation rule).
    pub fn is_special_teams(&self) -> bool {
        matches!(
            self,
            PlayType::Kickoff
                | PlayType::Punt
                | PlayType::ExtraPoint
                | PlayType::TwoPointConversion
        )
    }

    /// Counts toward offensive drive totals (yards, play count).
    pub fn is_scrimmage(&self) -> bool {
        !self.is_marker() && !self.is_special_teams()
    }
}

impl From<String> for PlayType {
    fn from(raw: String) -> Self {
        PlayType::parse(&raw)
    }
}

impl From<PlayType> for String {
    fn from(play_type: PlayType) -> Self {
        play_type.as_str().to_string()
    }
}

impl std::fmt::Display for PlayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side-relative field position.
///
/// `Own(y)` is `y` yards from the possessing team's goal line, `Opp(y)` is
/// `y` yards from the opponent's. Absolute 0..=100 yard lines normalize via
/// the convention that <= 50 is the team's own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPosition {
    Own(u8),
    Opp(u8),
}

impl FieldPosition {
    /// Normalize an absolute yard line (0 = own goal, 100 = opponent goal).
    pub fn from_absolute(yard_line: u8) -> Self {
        if yard_line <= 50 {
            FieldPosition::Own(yard_line)
        } else {
            FieldPosition::Opp(100 - yard_line)
        }
    }

    /// Inside the opponent 20.
    pub fn is_red_zone(&self) -> bool {
        matches!(self, FieldPosition::Opp(y) if *y <= 20)
    }
}

impl std::fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPosition::Own(y) => write!(f, "OWN {}", y),
            FieldPosition::Opp(y) => write!(f, "OPP {}", y),
        }
    }
}

/// One canonical play, immutable after normalization.
///
/// Both upstream schemas map onto this shape; everything downstream
/// (segmentation, classification, aggregation) reads only this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Strictly increasing within a game (normalizer enforces).
    pub sequence: u64,
    /// 1-4 regulation, 5 = overtime.
    pub quarter: u8,
    /// Seconds remaining in the quarter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_remaining_s: Option<u16>,
    /// Possession team abbreviation, if the feed knew it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards_to_go: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_position: Option<FieldPosition>,
    pub play_type: PlayType,
    pub description: String,
    pub yards_gained: i16,
    pub scoring: bool,
    pub turnover: bool,
    pub first_down: bool,
    pub penalty: bool,
    pub penalty_yards: i16,
    /// Expected Points Added, precomputed upstream. Opaque passthrough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epa: Option<f64>,
}

impl PlayRecord {
    /// Non-snap administrative record.
    pub fn is_marker(&self) -> bool {
        self.play_type.is_marker()
    }
}

/// Parse a `"mm:ss"` game clock into seconds. `None` for unparseable text.
pub fn parse_clock(text: &str) -> Option<u16> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    let minutes: u16 = minutes.trim().parse().ok()?;
    let seconds: u16 = seconds.trim().parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    // Feeds are free text; an absurd minute count must read as
    // unparseable, not overflow.
    minutes.checked_mul(60)?.checked_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_type_parse_both_vocabularies() {
        assert_eq!(PlayType::parse("passing"), PlayType::Pass);
        assert_eq!(PlayType::parse("pass"), PlayType::Pass);
        assert_eq!(PlayType::parse("Rush"), PlayType::Rush);
        assert_eq!(PlayType::parse("run"), PlayType::Rush);
        assert_eq!(PlayType::parse("KICKOFF"), PlayType::Kickoff);
        assert_eq!(PlayType::parse("field_goal"), PlayType::FieldGoal);
        assert_eq!(PlayType::parse("qb_kneel"), PlayType::Kneel);
        assert_eq!(
            PlayType::parse("fake reverse flea flicker"),
            PlayType::Other("fake reverse flea flicker".to_string())
        );
    }

    #[test]
    fn test_play_type_roundtrip_through_string() {
        let original = PlayType::TwoPointConversion;
        let as_string: String = original.clone().into();
        assert_eq!(PlayType::from(as_string), original);
    }

    #[test]
    fn test_marker_and_special_teams_split() {
        assert!(PlayType::EndGame.is_marker());
        assert!(PlayType::Timeout.is_marker());
        assert!(!PlayType::Punt.is_marker());

        assert!(PlayType::Kickoff.is_special_teams());
        assert!(PlayType::ExtraPoint.is_special_teams());
        assert!(!PlayType::FieldGoal.is_special_teams());

        assert!(PlayType::Pass.is_scrimmage());
        assert!(PlayType::FieldGoal.is_scrimmage());
        assert!(!PlayType::Kickoff.is_scrimmage());
        assert!(!PlayType::EndQuarter.is_scrimmage());
    }

    #[test]
    fn test_field_position_from_absolute() {
        assert_eq!(FieldPosition::from_absolute(25), FieldPosition::Own(25));
        assert_eq!(FieldPosition::from_absolute(50), FieldPosition::Own(50));
        assert_eq!(FieldPosition::from_absolute(75), FieldPosition::Opp(25));
        assert_eq!(FieldPosition::from_absolute(100), FieldPosition::Opp(0));
    }

    #[test]
    fn test_red_zone_threshold() {
        assert!(FieldPosition::Opp(20).is_red_zone());
        assert!(FieldPosition::Opp(1).is_red_zone());
        assert!(!FieldPosition::Opp(21).is_red_zone());
        assert!(!FieldPosition::Own(5).is_red_zone());
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("12:34"), Some(754));
        assert_eq!(parse_clock("0:00"), Some(0));
        assert_eq!(parse_clock("15:00"), Some(900));
        assert_eq!(parse_clock(" 2:05 "), Some(125));
        assert_eq!(parse_clock("12:61"), None);
        assert_eq!(parse_clock("1234"), None);
        assert_eq!(parse_clock("--:--"), None);
    }

    #[test]
    fn test_parse_clock_rejects_oversized_minutes() {
        assert_eq!(parse_clock("1100:00"), None);
        assert_eq!(parse_clock("65535:59"), None);
        // Largest minute count that still fits in seconds
        assert_eq!(parse_clock("1092:15"), Some(65535));
    }

    #[test]
    fn test_quarter_len() {
        assert_eq!(quarter_len_s(1), 900);
        assert_eq!(quarter_len_s(4), 900);
        assert_eq!(quarter_len_s(5), 600);
    }
}
