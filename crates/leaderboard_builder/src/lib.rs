//! Leaderboard Builder Library
//!
//! Standings CSV → ranked `data/leaderboard.json`
//! Previous ranks come from the snapshot written by the last run.

pub mod builder;
pub mod config;
pub mod csv_import;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod stats;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub use builder::build_leaderboard;
pub use config::{leaderboard_path, resolve_run_settings, RunSettings};
pub use csv_import::{parse_csv, parse_records, ParseStats};
pub use error::{LeaderboardError, RowError};
pub use models::{LeaderboardEntry, LeaderboardSnapshot, PlayerRecord, RankMovement};
pub use snapshot::{load_previous_ranks, read_snapshot, write_snapshot, PreviousRanks};
pub use stats::{format_points, LeaderboardStats};

/// Inputs for one update run
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub csv_file: PathBuf,
    /// Directory containing `data/`
    pub root: PathBuf,
    pub season: Option<String>,
    pub rounds: Option<i64>,
    pub today: NaiveDate,
}

/// Outcome of a successful update run
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub output_path: PathBuf,
    pub settings: RunSettings,
    pub parse_stats: ParseStats,
    pub snapshot: LeaderboardSnapshot,
}

impl UpdateReport {
    pub fn stats(&self) -> LeaderboardStats<'_> {
        LeaderboardStats::from_snapshot(&self.snapshot)
    }
}

/// Parse, rank against the previous snapshot, and write the new snapshot
///
/// The previous snapshot is read once and serves both the season/rounds
/// defaults and the previous-rank lookup. It is replaced only after the new
/// document has been fully written.
pub fn run_update(request: &UpdateRequest) -> Result<UpdateReport> {
    let output_path = leaderboard_path(&request.root);

    let existing = read_snapshot(&output_path)
        .with_context(|| format!("Failed to load existing leaderboard: {}", output_path.display()))?;

    let settings = resolve_run_settings(
        existing.as_ref(),
        request.season.clone(),
        request.rounds,
        request.today,
    );

    let (players, parse_stats) = parse_csv(&request.csv_file)?;
    log::info!(
        "Parsed {} players (skipped: {}, rows: {})",
        parse_stats.parsed,
        parse_stats.skipped,
        parse_stats.total_rows
    );

    let previous = snapshot::previous_ranks(existing.as_ref());
    let leaderboard =
        build_leaderboard(players, &previous, &settings.season, settings.rounds, request.today);

    if leaderboard.is_empty() {
        log::warn!("No valid players in {}, writing an empty leaderboard", request.csv_file.display());
    }

    write_leaderboard(&output_path, &leaderboard)?;

    Ok(UpdateReport { output_path, settings, parse_stats, snapshot: leaderboard })
}

fn write_leaderboard(path: &Path, leaderboard: &LeaderboardSnapshot) -> Result<()> {
    write_snapshot(path, leaderboard)
        .with_context(|| format!("Failed to write leaderboard: {}", path.display()))?;
    log::info!("Wrote {} ({} players)", path.display(), leaderboard.len());
    Ok(())
}
