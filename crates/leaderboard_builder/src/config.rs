//! Run configuration: output location and season/rounds defaults

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

use crate::models::LeaderboardSnapshot;

pub const DATA_DIR: &str = "data";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// `<root>/data/leaderboard.json`
pub fn leaderboard_path(root: &Path) -> PathBuf {
    root.join(DATA_DIR).join(LEADERBOARD_FILE)
}

/// Project root (`--root` / `LEADERBOARD_ROOT`), falling back to the working directory
pub fn resolve_root(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Season and rounds for this run after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub season: String,
    pub rounds: i64,
    /// Set when `rounds` was derived from the previous snapshot
    pub auto_incremented_from: Option<i64>,
}

/// Apply defaults from the existing snapshot
///
/// An empty season, supplied or stored, counts as missing. Without a previous snapshot the
/// season is `Spring <year>` and rounds start from 0 + 1.
pub fn resolve_run_settings(
    existing: Option<&LeaderboardSnapshot>,
    season: Option<String>,
    rounds: Option<i64>,
    today: NaiveDate,
) -> RunSettings {
    let season = season
        .filter(|s| !s.is_empty())
        .or_else(|| existing.map(|s| s.season.clone()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| default_season(today));

    match rounds {
        Some(rounds) => RunSettings { season, rounds, auto_incremented_from: None },
        None => {
            let previous = existing.map_or(0, |s| s.rounds);
            RunSettings {
                season,
                rounds: previous.saturating_add(1),
                auto_incremented_from: Some(previous),
            }
        }
    }
}

pub fn default_season(today: NaiveDate) -> String {
    format!("Spring {}", today.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn existing(season: &str, rounds: i64) -> LeaderboardSnapshot {
        LeaderboardSnapshot {
            season: season.to_string(),
            last_updated: "2026-10-12".to_string(),
            rounds,
            players: vec![],
        }
    }

    #[test]
    fn test_first_run_defaults() {
        let settings = resolve_run_settings(None, None, None, today());

        assert_eq!(settings.season, "Spring 2026");
        assert_eq!(settings.rounds, 1);
        assert_eq!(settings.auto_incremented_from, Some(0));
    }

    #[test]
    fn test_defaults_from_existing_snapshot() {
        let prev = existing("Autumn 2026", 6);
        let settings = resolve_run_settings(Some(&prev), None, None, today());

        assert_eq!(settings.season, "Autumn 2026");
        assert_eq!(settings.rounds, 7);
        assert_eq!(settings.auto_incremented_from, Some(6));
    }

    #[test]
    fn test_explicit_values_win() {
        let prev = existing("Autumn 2026", 6);
        let settings =
            resolve_run_settings(Some(&prev), Some("Winter 2027".to_string()), Some(2), today());

        assert_eq!(settings.season, "Winter 2027");
        assert_eq!(settings.rounds, 2);
        assert_eq!(settings.auto_incremented_from, None);
    }

    #[test]
    fn test_empty_season_falls_back() {
        let prev = existing("Autumn 2026", 1);
        let settings = resolve_run_settings(Some(&prev), Some(String::new()), Some(1), today());
        assert_eq!(settings.season, "Autumn 2026");
    }

    #[test]
    fn test_stored_empty_season_gets_default() {
        let prev = existing("", 3);
        let settings = resolve_run_settings(Some(&prev), None, None, today());
        assert_eq!(settings.season, "Spring 2026");
        assert_eq!(settings.rounds, 4);
    }

    #[test]
    fn test_round_counter_saturates() {
        let prev = existing("Autumn 2026", i64::MAX);
        let settings = resolve_run_settings(Some(&prev), None, None, today());

        assert_eq!(settings.rounds, i64::MAX);
        assert_eq!(settings.auto_incremented_from, Some(i64::MAX));
    }

    #[test]
    fn test_leaderboard_path() {
        let path = leaderboard_path(Path::new("/srv/poker"));
        assert_eq!(path, PathBuf::from("/srv/poker/data/leaderboard.json"));
        assert_eq!(resolve_root(Some(PathBuf::from("/x"))), PathBuf::from("/x"));
    }
}
