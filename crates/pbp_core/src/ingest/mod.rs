//! Feed ingestion: two upstream schemas, one canonical play list.
//!
//! Each source schema is its own `Deserialize` struct and the pair meet in
//! the `SourceRecord` union, so downstream code pattern-matches the source
//! exhaustively instead of probing for field presence. Malformed records
//! drop with a warning; ingestion never aborts a batch.

pub mod historical;
pub mod live;

pub use historical::HistoricalPlay;
pub use live::LivePlay;

use serde::Deserialize;

use crate::models::play::PlayRecord;

/// A raw record from either upstream feed.
///
/// Both schemas reject unknown fields, so untagged resolution is decided by
/// shape: a record either is a live play or a historical play, never
/// accidentally both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceRecord {
    Live(LivePlay),
    Historical(HistoricalPlay),
}

/// Normalize a batch of raw records into the canonical ordered play list.
///
/// Drops records missing mandatory fields (with a warning), sorts by
/// sequence, and drops duplicate sequences so the strictly-increasing
/// invariant holds on the output.
pub fn normalize(records: Vec<SourceRecord>) -> Vec<PlayRecord> {
    let mut plays: Vec<PlayRecord> = records
        .into_iter()
        .filter_map(|record| match record {
            SourceRecord::Live(play) => play.into_play(),
            SourceRecord::Historical(play) => play.into_play(),
        })
        .collect();

    plays.sort_by_key(|play| play.sequence);
    plays.dedup_by(|duplicate, kept| {
        let same = duplicate.sequence == kept.sequence;
        if same {
            log::warn!("dropping duplicate play sequence {}", duplicate.sequence);
        }
        same
    });
    plays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::play::PlayType;
    use serde_json::json;

    #[test]
    fn test_union_resolves_live_by_shape() {
        let record: SourceRecord = serde_json::from_value(json!({
            "sequence": 10,
            "period": 1,
            "clock": "14:20",
            "team": "KC",
            "play_type": "rushing",
            "text": "I.Pacheco up the middle for 5 yards",
            "stat_yards": 5
        }))
        .unwrap();
        assert!(matches!(record, SourceRecord::Live(_)));
    }

    #[test]
    fn test_union_resolves_historical_by_shape() {
        let record: SourceRecord = serde_json::from_value(json!({
            "play_id": 55,
            "qtr": 1,
            "sec_elapsed": 40,
            "posteam": "KC",
            "play_type": "run",
            "desc": "I.Pacheco up the middle for 5 yards",
            "yards_gained": 5
        }))
        .unwrap();
        assert!(matches!(record, SourceRecord::Historical(_)));
    }

    #[test]
    fn test_historical_record_with_side_of_field_deserializes() {
        // The reconciled feed carries the ball's side of the field; the
        // union must still resolve instead of failing the whole request.
        let record: SourceRecord = serde_json::from_value(json!({
            "play_id": 55,
            "qtr": 1,
            "sec_elapsed": 40,
            "posteam": "KC",
            "side_of_field": "KC",
            "play_type": "run",
            "desc": "I.Pacheco up the middle for 5 yards",
            "yards_gained": 5
        }))
        .unwrap();
        assert!(matches!(record, SourceRecord::Historical(_)));

        let plays = normalize(vec![record]);
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].sequence, 55);
    }

    #[test]
    fn test_normalize_sorts_by_sequence() {
        let records: Vec<SourceRecord> = serde_json::from_value(json!([
            {"sequence": 30, "period": 1, "play_type": "passing", "text": "b"},
            {"sequence": 10, "period": 1, "play_type": "kickoff", "text": "a"},
            {"sequence": 20, "period": 1, "play_type": "rushing", "text": "c"}
        ]))
        .unwrap();

        let plays = normalize(records);
        let sequences: Vec<u64> = plays.iter().map(|p| p.sequence).collect();
        assert_eq!(sequences, vec![10, 20, 30]);
        assert_eq!(plays[0].play_type, PlayType::Kickoff);
    }

    #[test]
    fn test_normalize_drops_duplicates_and_malformed() {
        let records: Vec<SourceRecord> = serde_json::from_value(json!([
            {"sequence": 10, "period": 1, "play_type": "rushing", "text": "keep"},
            {"sequence": 10, "period": 1, "play_type": "passing", "text": "dup"},
            {"period": 1, "play_type": "passing", "text": "no sequence"},
            {"play_id": 20, "sec_elapsed": 10, "desc": "no quarter"}
        ]))
        .unwrap();

        let plays = normalize(records);
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].description, "keep");
    }

    #[test]
    fn test_normalize_mixes_both_feeds() {
        let records: Vec<SourceRecord> = serde_json::from_value(json!([
            {"play_id": 2, "qtr": 1, "sec_elapsed": 30, "posteam": "KC", "play_type": "run", "desc": "x", "yards_gained": 3},
            {"sequence": 1, "period": 1, "clock": "15:00", "team": "KC", "play_type": "kickoff", "text": "y"}
        ]))
        .unwrap();

        let plays = normalize(records);
        assert_eq!(plays.len(), 2);
        assert_eq!(plays[0].sequence, 1);
        assert_eq!(plays[0].clock_remaining_s, Some(900));
        assert_eq!(plays[1].clock_remaining_s, Some(870));
    }

    #[test]
    fn test_empty_batch_is_not_an_error() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
