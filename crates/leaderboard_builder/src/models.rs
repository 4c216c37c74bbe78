//! Leaderboard data model
//!
//! `PlayerRecord` lives only for the duration of a run. `LeaderboardSnapshot`
//! is the document persisted to `data/leaderboard.json` and read back on the
//! next run for rank continuity.

use serde::{Deserialize, Serialize};

/// One valid row of the standings CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Legal name (never written to the leaderboard)
    pub name: String,
    /// Display handle, identity key across runs
    pub pseudonym: String,
    pub points: i64,
    pub highest_points: i64,
    pub lowest_points: i64,
}

/// Ranked player as it appears in the `players` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    #[serde(default)]
    pub previous_rank: u32,
    pub pseudonym: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub highest_points: i64,
    #[serde(default)]
    pub lowest_points: i64,
}

impl LeaderboardEntry {
    /// Movement since the previous snapshot
    pub fn movement(&self) -> RankMovement {
        RankMovement::between(self.previous_rank, self.rank)
    }
}

/// Persisted leaderboard document
///
/// Missing top-level keys fall back to their defaults so that hand-edited
/// or older files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    #[serde(default)]
    pub season: String,
    /// ISO date (`YYYY-MM-DD`)
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub rounds: i64,
    /// Ordered by rank ascending
    #[serde(default)]
    pub players: Vec<LeaderboardEntry>,
}

impl LeaderboardSnapshot {
    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.players.first()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Rank change between two snapshots (lower rank number is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMovement {
    Up(u32),
    Down(u32),
    Unchanged,
}

impl RankMovement {
    pub fn between(previous_rank: u32, rank: u32) -> Self {
        if previous_rank > rank {
            RankMovement::Up(previous_rank - rank)
        } else if previous_rank < rank {
            RankMovement::Down(rank - previous_rank)
        } else {
            RankMovement::Unchanged
        }
    }
}

impl std::fmt::Display for RankMovement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankMovement::Up(n) => write!(f, "▲ {}", n),
            RankMovement::Down(n) => write!(f, "▼ {}", n),
            RankMovement::Unchanged => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, previous_rank: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            previous_rank,
            pseudonym: "Snorkfrøken".to_string(),
            points: 83950,
            highest_points: 83950,
            lowest_points: 40000,
        }
    }

    #[test]
    fn test_movement_direction() {
        assert_eq!(entry(2, 5).movement(), RankMovement::Up(3));
        assert_eq!(entry(4, 1).movement(), RankMovement::Down(3));
        assert_eq!(entry(3, 3).movement(), RankMovement::Unchanged);
    }

    #[test]
    fn test_movement_display() {
        assert_eq!(RankMovement::Up(2).to_string(), "▲ 2");
        assert_eq!(RankMovement::Down(1).to_string(), "▼ 1");
        assert_eq!(RankMovement::Unchanged.to_string(), "—");
    }

    #[test]
    fn test_entry_uses_camel_case_keys() {
        let json = serde_json::to_value(entry(1, 2)).unwrap();

        assert_eq!(json["rank"], 1);
        assert_eq!(json["previousRank"], 2);
        assert_eq!(json["highestPoints"], 83950);
        assert_eq!(json["lowestPoints"], 40000);
        assert!(json.get("previous_rank").is_none());
    }

    #[test]
    fn test_snapshot_missing_keys_default() {
        let snapshot: LeaderboardSnapshot =
            serde_json::from_str(r#"{"players": [{"rank": 1, "previousRank": 1, "pseudonym": "Ace"}]}"#)
                .unwrap();

        assert_eq!(snapshot.season, "");
        assert_eq!(snapshot.rounds, 0);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.players[0].points, 0);
        assert_eq!(snapshot.leader().map(|p| p.pseudonym.as_str()), Some("Ace"));
    }
}
