//! Leaderboard Updater CLI
//!
//! Standings CSV → data/leaderboard.json

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use leaderboard_builder::{format_points, UpdateReport, UpdateRequest};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "update_leaderboard")]
#[command(about = "Update the league leaderboard from a CSV export", long_about = None)]
struct Cli {
    /// Path to the CSV leaderboard file
    csv_file: PathBuf,

    /// Season name, e.g. "Spring 2026". If omitted, keeps the existing season.
    #[arg(long)]
    season: Option<String>,

    /// Number of rounds played. If omitted, auto-increments the existing value by 1.
    #[arg(long, allow_negative_numbers = true)]
    rounds: Option<i64>,

    /// Project root containing data/ (defaults to the current directory)
    #[arg(long, env = "LEADERBOARD_ROOT")]
    root: Option<PathBuf>,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    println!("📂 Reading: {}", cli.csv_file.display());

    let request = UpdateRequest {
        csv_file: cli.csv_file,
        root: leaderboard_builder::config::resolve_root(cli.root),
        season: cli.season,
        rounds: cli.rounds,
        today: chrono::Local::now().date_naive(),
    };

    let report = leaderboard_builder::run_update(&request)?;

    print_summary(&report);

    Ok(())
}

#[cfg(feature = "cli")]
fn print_summary(report: &UpdateReport) {
    if let Some(previous) = report.settings.auto_incremented_from {
        println!("   Auto-incrementing rounds: {} → {}", previous, report.settings.rounds);
    }
    println!("   Found {} players", report.parse_stats.parsed);
    if report.parse_stats.skipped > 0 {
        println!("   ⚠  Skipped {} malformed lines", report.parse_stats.skipped);
    }

    let stats = report.stats();

    println!("\n✅ Updated {}", report.output_path.display());
    println!("   Season:  {}", report.settings.season);
    println!("   Rounds:  {}", report.settings.rounds);
    println!("   Players: {}", stats.player_count);

    if let Some(average) = stats.average_points {
        println!("   Average: {} pts", format_points(average));
    }
    if let Some(leader) = stats.leader {
        println!("   🥇 {} — {} pts", leader.pseudonym, format_points(leader.points));
    }
    if let Some(lead) = stats.lead_over_runner_up {
        println!("   Lead over #2: {} pts", format_points(lead));
    }
    if let Some((climber, _)) = stats.biggest_climber {
        println!("   📈 Biggest climber: {} ({})", climber.pseudonym, climber.movement());
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("update_leaderboard CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
