//! Canonical data model shared by ingestion and analysis.
//!
//! - `play` - canonical `PlayRecord`, play-type vocabulary, field position
//! - `drive` - derived `Drive` with outcome and per-drive metrics

pub mod drive;
pub mod play;

pub use drive::{Drive, DriveOutcome, GameStatus};
pub use play::{
    parse_clock, quarter_len_s, FieldPosition, PlayRecord, PlayType, OVERTIME_QUARTER,
    OVERTIME_QUARTER_S, REGULATION_QUARTER_S,
};
