use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed leaderboard snapshot {}: {source}", path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SnapshotSerialize(#[from] serde_json::Error),
}

impl LeaderboardError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LeaderboardError::Io { path: path.to_path_buf(), source }
    }
}

/// Reason a CSV data row was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("not enough columns (found {found}, expected 5)")]
    TooFewColumns { found: usize },

    #[error("could not parse {column} '{value}'")]
    InvalidNumber { column: &'static str, value: String },

    #[error("unreadable row: {0}")]
    Unreadable(String),
}
