//! JSON surface for embedders: raw feed records in, enriched drives out.
//!
//! The request carries records from either upstream schema (or a mix, as
//! happens when a poller switches feeds mid-game); the response is the full
//! recomputed drive list. Invoked synchronously on every data refresh.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::compute_drives;
use crate::error::{CoreError, Result};
use crate::ingest::{normalize, SourceRecord};
use crate::models::drive::{Drive, GameStatus};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct DrivesRequest {
    pub schema_version: u8,
    /// Game still being played; enables the "In Progress" default for the
    /// chronologically last drive.
    #[serde(default)]
    pub live: bool,
    pub plays: Vec<SourceRecord>,
}

#[derive(Debug, Serialize)]
pub struct DrivesResponse {
    pub schema_version: u8,
    pub game_status: GameStatus,
    pub drive_count: usize,
    pub drives: Vec<Drive>,
}

/// Reconstruct drives from a JSON request.
///
/// Errors only on request-level problems (malformed JSON, wrong schema
/// version). Feed-level problems never error: malformed records drop with a
/// warning and an empty play list yields an empty drive list.
pub fn compute_drives_json(request_json: &str) -> Result<String> {
    let request: DrivesRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        warn!(
            "rejecting drives request with schema version {}",
            request.schema_version
        );
        return Err(CoreError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let status = if request.live { GameStatus::Live } else { GameStatus::Final };

    let record_count = request.plays.len();
    let plays = normalize(request.plays);
    if plays.len() < record_count {
        warn!(
            "dropped {} of {} records during normalization",
            record_count - plays.len(),
            record_count
        );
    }

    let drives = compute_drives(&plays, status);
    info!(
        "reconstructed {} drives from {} plays",
        drives.len(),
        plays.len()
    );

    let response = DrivesResponse {
        schema_version: SCHEMA_VERSION,
        game_status: status,
        drive_count: drives.len(),
        drives,
    };
    Ok(serde_json::to_string(&response)?)
}
