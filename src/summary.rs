use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::listings::{all_players, all_teams, seasons, venues};

/// Headline numbers for the Home page and the validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total_matches: usize,
    pub first_season: Option<String>,
    pub last_season: Option<String>,
    pub seasons: usize,
    pub teams: usize,
    pub venues: usize,
    pub players: usize,
    pub total_deliveries: usize,
    pub delivery_matches: usize,
    pub batters: usize,
    pub bowlers: usize,
    pub total_runs: u64,
    pub total_wickets: usize,
}

impl DatasetSummary {
    pub fn compute(data: &Dataset) -> Self {
        let season_list = seasons(&data.matches);
        let delivery_matches: HashSet<u64> = data.deliveries.iter().map(|d| d.match_id).collect();
        let batters: HashSet<&str> = data.deliveries.iter().map(|d| d.batter.as_str()).collect();
        let bowlers: HashSet<&str> = data.deliveries.iter().map(|d| d.bowler.as_str()).collect();

        Self {
            total_matches: data.matches.len(),
            first_season: season_list.first().cloned(),
            last_season: season_list.last().cloned(),
            seasons: season_list.len(),
            teams: all_teams(&data.matches).len(),
            venues: venues(&data.matches).len(),
            players: all_players(&data.deliveries).len(),
            total_deliveries: data.deliveries.len(),
            delivery_matches: delivery_matches.len(),
            batters: batters.len(),
            bowlers: bowlers.len(),
            total_runs: data.deliveries.iter().map(|d| u64::from(d.total_runs)).sum(),
            total_wickets: data.deliveries.iter().filter(|d| d.is_wicket).count(),
        }
    }
}

/// Rows that break the data model's invariants. The engine tolerates them;
/// this is for reporting only.
pub fn integrity_warnings(data: &Dataset) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for m in &data.matches {
        if !seen.insert(m.id) {
            out.push(format!("match {}: duplicate id", m.id));
        }
        if m.team1 == m.team2 {
            out.push(format!("match {}: team1 and team2 are both {}", m.id, m.team1));
        }
        if let Some(winner) = m.winner.as_deref()
            && !m.involves(winner)
        {
            out.push(format!(
                "match {}: winner {winner} is neither {} nor {}",
                m.id, m.team1, m.team2
            ));
        }
    }

    let mut unknown_matches = HashSet::new();
    for (idx, d) in data.deliveries.iter().enumerate() {
        if d.batsman_runs > d.total_runs {
            out.push(format!(
                "delivery {}: batsman_runs {} exceeds total_runs {}",
                idx + 1,
                d.batsman_runs,
                d.total_runs
            ));
        }
        if !seen.contains(&d.match_id) && unknown_matches.insert(d.match_id) {
            out.push(format!("deliveries reference unknown match {}", d.match_id));
        }
    }

    out
}
