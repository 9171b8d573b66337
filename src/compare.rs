use std::collections::HashSet;

use serde::Serialize;

use crate::batting::{BattingRow, batting_stats};
use crate::bowling::{BowlingRow, bowling_stats};
use crate::error::StatsError;
use crate::records::DeliveryRecord;

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerComparison {
    pub batting: Vec<BattingRow>,
    /// Empty when none of the selected players has taken a wicket.
    pub bowling: Vec<BowlingRow>,
}

/// Batting and bowling rows for 2 to 5 selected players, in table order.
pub fn compare_players(
    deliveries: &[DeliveryRecord],
    names: &[String],
) -> Result<PlayerComparison, StatsError> {
    let selected: HashSet<&str> = names.iter().map(String::as_str).collect();
    if !(MIN_COMPARE..=MAX_COMPARE).contains(&selected.len()) {
        return Err(StatsError::ComparisonSize(selected.len()));
    }

    let batting = batting_stats(deliveries, None)
        .into_iter()
        .filter(|row| selected.contains(row.player.as_str()))
        .collect();
    let bowling = bowling_stats(deliveries, None)
        .into_iter()
        .filter(|row| selected.contains(row.player.as_str()))
        .collect();

    Ok(PlayerComparison { batting, bowling })
}
