use serde::Serialize;

use crate::grouping::Grouped;
use crate::ratio::safe_percentage;
use crate::records::MatchRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    pub team: String,
    pub matches_played: usize,
    pub wins: usize,
    pub win_percentage: f64,
}

impl TeamRow {
    /// Everything that was not a win, so no-results count here too.
    pub fn losses(&self) -> usize {
        self.matches_played.saturating_sub(self.wins)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonPerformanceRow {
    pub season: String,
    pub matches: usize,
    pub wins: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub team1: String,
    pub team2: String,
    pub total_matches: usize,
    pub team1_wins: usize,
    pub team2_wins: usize,
    /// Ties and no-results together.
    pub ties: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct TeamAcc {
    played: usize,
    wins: usize,
}

/// Played/won/win% for every team, sorted by wins.
pub fn team_stats(matches: &[MatchRecord]) -> Vec<TeamRow> {
    let mut grouped: Grouped<&str, TeamAcc> = Grouped::new();
    for m in matches {
        grouped.entry(m.team1.as_str()).played += 1;
        grouped.entry(m.team2.as_str()).played += 1;
    }
    // Wins only count for teams that played; a winner outside the pair has no row.
    for m in matches {
        if let Some(winner) = m.winner.as_deref()
            && grouped.contains_key(winner)
        {
            grouped.entry(winner).wins += 1;
        }
    }

    let mut out: Vec<TeamRow> = grouped
        .into_iter()
        .map(|(team, acc)| TeamRow {
            team: team.to_string(),
            matches_played: acc.played,
            wins: acc.wins,
            win_percentage: safe_percentage(acc.wins as f64, acc.played as f64, 2),
        })
        .collect();

    out.sort_by(|a, b| b.wins.cmp(&a.wins));
    out
}

/// Season-by-season record for one team, seasons ascending. Unknown team gives
/// an empty table.
pub fn team_performance_by_season(matches: &[MatchRecord], team: &str) -> Vec<SeasonPerformanceRow> {
    let grouped: Grouped<&str, TeamAcc> = Grouped::fold(
        matches.iter().filter(|m| m.involves(team)),
        |m| m.season.as_str(),
        |acc: &mut TeamAcc, m| {
            acc.played += 1;
            if m.winner_is(team) {
                acc.wins += 1;
            }
        },
    );

    let mut out: Vec<SeasonPerformanceRow> = grouped
        .into_iter()
        .map(|(season, acc)| SeasonPerformanceRow {
            season: season.to_string(),
            matches: acc.played,
            wins: acc.wins,
            win_rate: safe_percentage(acc.wins as f64, acc.played as f64, 2),
        })
        .collect();
    out.sort_by(|a, b| a.season.cmp(&b.season));
    out
}

/// Record between two teams regardless of which side was listed first.
pub fn head_to_head(matches: &[MatchRecord], team1: &str, team2: &str) -> HeadToHead {
    let mut total_matches = 0usize;
    let mut team1_wins = 0usize;
    let mut team2_wins = 0usize;
    for m in matches.iter().filter(|m| m.is_between(team1, team2)) {
        total_matches += 1;
        if m.winner_is(team1) {
            team1_wins += 1;
        } else if m.winner_is(team2) {
            team2_wins += 1;
        }
    }

    HeadToHead {
        team1: team1.to_string(),
        team2: team2.to_string(),
        total_matches,
        team1_wins,
        team2_wins,
        ties: total_matches - team1_wins - team2_wins,
    }
}
