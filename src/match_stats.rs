use serde::Serialize;

use crate::error::StatsError;
use crate::grouping::{Grouped, count_by};
use crate::ratio::safe_percentage;
use crate::records::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonCount {
    pub season: String,
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueRow {
    pub venue: String,
    pub matches_played: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TossImpact {
    pub total_matches: usize,
    pub toss_winner_won_match: usize,
    pub win_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonWinner {
    pub season: String,
    pub winner: Option<String>,
    pub venue: String,
}

/// Matches per season, seasons ascending.
pub fn matches_by_season(matches: &[MatchRecord]) -> Vec<SeasonCount> {
    let mut out: Vec<SeasonCount> = count_by(matches, |m| m.season.as_str())
        .into_iter()
        .map(|(season, matches)| SeasonCount {
            season: season.to_string(),
            matches,
        })
        .collect();
    out.sort_by(|a, b| a.season.cmp(&b.season));
    out
}

/// Matches per venue, busiest first.
pub fn venue_stats(matches: &[MatchRecord]) -> Vec<VenueRow> {
    let mut out: Vec<VenueRow> = count_by(matches, |m| m.venue.as_str())
        .into_iter()
        .map(|(venue, matches_played)| VenueRow {
            venue: venue.to_string(),
            matches_played,
        })
        .collect();
    out.sort_by(|a, b| b.matches_played.cmp(&a.matches_played));
    out
}

/// How often the toss winner went on to win. No-result matches stay in the
/// denominator. Fails on an empty table rather than reporting NaN.
pub fn toss_impact(matches: &[MatchRecord]) -> Result<TossImpact, StatsError> {
    if matches.is_empty() {
        return Err(StatsError::EmptyMatchTable);
    }
    let toss_winner_won_match = matches
        .iter()
        .filter(|m| m.winner_is(&m.toss_winner))
        .count();
    let total_matches = matches.len();
    Ok(TossImpact {
        total_matches,
        toss_winner_won_match,
        win_percentage: safe_percentage(toss_winner_won_match as f64, total_matches as f64, 2),
    })
}

/// Winner and venue of each season's final, seasons ascending.
///
/// The "final" is simply the season's last match by date, with same-day
/// matches resolved by file order. That holds for a clean schedule but is a
/// heuristic: a washed-out final or a mis-dated row credits the wrong team.
pub fn season_winners(matches: &[MatchRecord]) -> Vec<SeasonWinner> {
    let mut by_date: Vec<&MatchRecord> = matches.iter().collect();
    by_date.sort_by_key(|m| m.date);

    let finals: Grouped<&str, Option<&MatchRecord>> =
        Grouped::fold(by_date, |m| m.season.as_str(), |last, m| *last = Some(*m));

    let mut out: Vec<SeasonWinner> = finals
        .into_iter()
        .filter_map(|(season, last)| {
            last.map(|m| SeasonWinner {
                season: season.to_string(),
                winner: m.winner.clone(),
                venue: m.venue.clone(),
            })
        })
        .collect();
    out.sort_by(|a, b| a.season.cmp(&b.season));
    out
}
