//! Snapshot persistence
//!
//! Reads the previous `leaderboard.json` for rank continuity and writes the new
//! one atomically (temp file + rename), so a failed run leaves the old file intact.

use rustc_hash::FxHashMap;
use std::fs::{self, rename, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::LeaderboardError;
use crate::models::LeaderboardSnapshot;

/// Pseudonym → rank from the last persisted snapshot
pub type PreviousRanks = FxHashMap<String, u32>;

/// Read an existing snapshot; `Ok(None)` when the file does not exist
pub fn read_snapshot(path: &Path) -> Result<Option<LeaderboardSnapshot>, LeaderboardError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LeaderboardError::io(path, e)),
    };

    let snapshot: LeaderboardSnapshot = serde_json::from_str(&json).map_err(|source| {
        LeaderboardError::SnapshotParse { path: path.to_path_buf(), source }
    })?;

    log::info!(
        "Loaded snapshot {} ({} players, season '{}', round {})",
        path.display(),
        snapshot.players.len(),
        snapshot.season,
        snapshot.rounds
    );
    Ok(Some(snapshot))
}

/// Rank lookup by pseudonym; empty without a prior snapshot
///
/// A pseudonym listed twice maps to its last listed rank.
pub fn previous_ranks(snapshot: Option<&LeaderboardSnapshot>) -> PreviousRanks {
    snapshot
        .map(|s| s.players.iter().map(|p| (p.pseudonym.clone(), p.rank)).collect())
        .unwrap_or_default()
}

/// Load the previous ranks straight from disk
pub fn load_previous_ranks(path: &Path) -> Result<PreviousRanks, LeaderboardError> {
    Ok(previous_ranks(read_snapshot(path)?.as_ref()))
}

/// Serialize with 2-space indentation, non-ASCII kept as-is
pub fn to_pretty_json(snapshot: &LeaderboardSnapshot) -> Result<String, LeaderboardError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the snapshot, creating parent directories as needed
pub fn write_snapshot(path: &Path, snapshot: &LeaderboardSnapshot) -> Result<(), LeaderboardError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LeaderboardError::io(parent, e))?;
    }

    let json = to_pretty_json(snapshot)?;

    // Atomic save: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    write_synced(&temp_path, json.as_bytes()).map_err(|e| LeaderboardError::io(&temp_path, e))?;

    rename(&temp_path, path).map_err(|e| LeaderboardError::io(path, e))?;

    log::debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}
