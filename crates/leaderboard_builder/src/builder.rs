//! Sort-and-rank
//!
//! Records are stable-sorted by points descending, so equal scores keep their
//! CSV order. Rank is the 1-based position after sorting. A pseudonym missing
//! from the previous ranks gets its own new rank as `previous_rank`.

use chrono::NaiveDate;

use crate::models::{LeaderboardEntry, LeaderboardSnapshot, PlayerRecord};
use crate::snapshot::PreviousRanks;

/// `lastUpdated` date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rank `records` and wrap them in a snapshot dated `date`
pub fn build_leaderboard(
    mut records: Vec<PlayerRecord>,
    previous_ranks: &PreviousRanks,
    season: &str,
    rounds: i64,
    date: NaiveDate,
) -> LeaderboardSnapshot {
    // Vec::sort_by is stable
    records.sort_by(|a, b| b.points.cmp(&a.points));

    let players = records
        .into_iter()
        .zip(1u32..)
        .map(|(record, rank)| LeaderboardEntry {
            rank,
            previous_rank: previous_ranks.get(&record.pseudonym).copied().unwrap_or(rank),
            pseudonym: record.pseudonym,
            points: record.points,
            highest_points: record.highest_points,
            lowest_points: record.lowest_points,
        })
        .collect();

    LeaderboardSnapshot {
        season: season.to_string(),
        last_updated: date.format(DATE_FORMAT).to_string(),
        rounds,
        players,
    }
}
