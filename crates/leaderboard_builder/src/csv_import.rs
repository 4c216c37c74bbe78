//! Standings CSV → `PlayerRecord` parsing
//!
//! Expected format (first line is a header and is discarded):
//!
//! ```text
//! name, pseudonym, current points, highest points, lowest points
//! William Ekedahl, Snorkfrøken, 83950, 83950, 40000
//! ```
//!
//! Rows that do not validate are logged and skipped; only an unreadable file
//! fails the whole parse.

use anyhow::{Context, Result};
use csv::{StringRecord, Trim};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::RowError;
use crate::models::PlayerRecord;

/// Minimum number of columns in a data row
pub const REQUIRED_COLUMNS: usize = 5;

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-blank data rows seen (header excluded)
    pub total_rows: u32,
    pub parsed: u32,
    pub skipped: u32,
    pub blank: u32,
}

/// Parse the standings CSV at `csv_path`
pub fn parse_csv(csv_path: &Path) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    parse_records(file)
        .with_context(|| format!("Failed to read CSV file: {}", csv_path.display()))
}

/// Parse standings CSV from any reader, keeping input order
pub fn parse_records<R: Read>(input: R) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input);

    // Surface an unreadable header as a fatal error rather than a skipped row
    reader.headers().context("Failed to read CSV header")?;

    let mut players = Vec::new();
    let mut stats = ParseStats::default();
    let mut seen = FxHashSet::default();
    let mut record = StringRecord::new();

    loop {
        let (line, row) = match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) if is_blank(&record) => {
                stats.blank += 1;
                continue;
            }
            Ok(true) => (line_of(record.position()), parse_row(&record)),
            Err(e) if e.is_io_error() => {
                return Err(e).context("I/O error while reading CSV");
            }
            Err(e) => (line_of(e.position()), Err(RowError::Unreadable(e.to_string()))),
        };
        stats.total_rows += 1;

        match row {
            Ok(player) => {
                if !seen.insert(player.pseudonym.clone()) {
                    log::warn!(
                        "Line {}: duplicate pseudonym '{}', ranking both rows",
                        line,
                        player.pseudonym
                    );
                }
                players.push(player);
                stats.parsed += 1;
            }
            Err(e @ RowError::Unreadable(_)) => {
                stats.skipped += 1;
                log::warn!("Skipping line {}: {}", line, e);
            }
            Err(e) => {
                stats.skipped += 1;
                log::warn!("Skipping line {}: {} → {}", line, e, raw_line(&record));
            }
        }
    }

    Ok((players, stats))
}

/// Validate one data row
pub fn parse_row(record: &StringRecord) -> Result<PlayerRecord, RowError> {
    if record.len() < REQUIRED_COLUMNS {
        return Err(RowError::TooFewColumns { found: record.len() });
    }

    Ok(PlayerRecord {
        name: record[0].to_string(),
        pseudonym: record[1].to_string(),
        points: parse_points(record, 2, "current points")?,
        highest_points: parse_points(record, 3, "highest points")?,
        lowest_points: parse_points(record, 4, "lowest points")?,
    })
}

fn parse_points(record: &StringRecord, idx: usize, column: &'static str) -> Result<i64, RowError> {
    let value = &record[idx];
    value.parse::<i64>().map_err(|_| RowError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

fn line_of(position: Option<&csv::Position>) -> u64 {
    position.map_or(0, |p| p.line())
}

/// Whitespace-only line; a line of bare commas still has to validate
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

fn raw_line(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(", ")
}
