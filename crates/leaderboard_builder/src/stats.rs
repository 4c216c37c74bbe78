//! Summary statistics shown alongside the leaderboard

use crate::models::{LeaderboardEntry, LeaderboardSnapshot, RankMovement};

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardStats<'a> {
    pub player_count: usize,
    /// Widened so that no combination of `i64` scores can overflow
    pub total_points: i128,
    /// Rounded half away from zero; `None` without players
    pub average_points: Option<i64>,
    pub leader: Option<&'a LeaderboardEntry>,
    /// Leader's points minus #2's points; `None` if the gap overflows `i64`
    pub lead_over_runner_up: Option<i64>,
    /// Largest positive climb, first in rank order on ties
    pub biggest_climber: Option<(&'a LeaderboardEntry, u32)>,
}

impl<'a> LeaderboardStats<'a> {
    pub fn from_snapshot(snapshot: &'a LeaderboardSnapshot) -> Self {
        let players = &snapshot.players;
        let total_points: i128 = players.iter().map(|p| i128::from(p.points)).sum();
        let average_points = rounded_average(total_points, players.len());

        let lead_over_runner_up = match players.as_slice() {
            [leader, runner_up, ..] => leader.points.checked_sub(runner_up.points),
            _ => None,
        };

        let mut biggest_climber: Option<(&LeaderboardEntry, u32)> = None;
        for player in players {
            if let RankMovement::Up(climb) = player.movement() {
                if biggest_climber.map_or(true, |(_, best)| climb > best) {
                    biggest_climber = Some((player, climb));
                }
            }
        }

        Self {
            player_count: players.len(),
            total_points,
            average_points,
            leader: snapshot.leader(),
            lead_over_runner_up,
            biggest_climber,
        }
    }
}

/// Integer mean rounded half away from zero
fn rounded_average(total: i128, count: usize) -> Option<i64> {
    if count == 0 {
        return None;
    }
    let count = count as i128;
    let doubled = if total >= 0 { total * 2 + count } else { total * 2 - count };
    i64::try_from(doubled / (count * 2)).ok()
}

/// Thousands-separated points, e.g. `83,950`
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if points < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
