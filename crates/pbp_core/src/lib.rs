//! # pbp_core - Play-by-Play Drive Reconstruction
//!
//! Ingests a chronological stream of football play records for one game and
//! reconstructs possession-level structure: drive boundaries, terminal
//! outcomes, and per-drive summary statistics.
//!
//! ## Features
//! - Two upstream feed schemas (live and historical) normalized into one
//!   canonical play representation
//! - Deterministic drive segmentation and outcome classification (same
//!   input = same drive list)
//! - Pure, side-effect-free recomputation: safe to re-run on every poll of
//!   a live game
//! - Fail-soft ingestion: malformed records drop with a warning, never
//!   aborting the batch
//! - JSON API for easy integration with presentation layers

pub mod analysis;
pub mod api;
pub mod error;
pub mod ingest;
pub mod models;

// Re-export main API functions
pub use analysis::{compute_drives, segment, RawDrive};
pub use api::{compute_drives_json, DrivesRequest, DrivesResponse};
pub use error::{CoreError, Result};
pub use ingest::{normalize, HistoricalPlay, LivePlay, SourceRecord};
pub use models::{Drive, DriveOutcome, FieldPosition, GameStatus, PlayRecord, PlayType};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
