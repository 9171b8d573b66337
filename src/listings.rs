use std::collections::BTreeSet;

use crate::records::{DeliveryRecord, MatchRecord};

/// Everyone who batted or bowled, sorted.
pub fn all_players(deliveries: &[DeliveryRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = deliveries
        .iter()
        .flat_map(|d| [d.batter.as_str(), d.bowler.as_str()])
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Every team listed as team1 or team2, sorted.
pub fn all_teams(matches: &[MatchRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = matches
        .iter()
        .flat_map(|m| [m.team1.as_str(), m.team2.as_str()])
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// Distinct seasons, sorted.
pub fn seasons(matches: &[MatchRecord]) -> Vec<String> {
    let seasons: BTreeSet<&str> = matches.iter().map(|m| m.season.as_str()).collect();
    seasons.into_iter().map(str::to_string).collect()
}

/// Distinct venues, sorted.
pub fn venues(matches: &[MatchRecord]) -> Vec<String> {
    let venues: BTreeSet<&str> = matches.iter().map(|m| m.venue.as_str()).collect();
    venues.into_iter().map(str::to_string).collect()
}
