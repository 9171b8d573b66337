use std::collections::HashSet;

use serde::Serialize;

use crate::grouping::Grouped;
use crate::ratio::{safe_percentage, safe_ratio};
use crate::records::DeliveryRecord;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRow {
    pub player: String,
    pub innings: usize,
    pub total_runs: u64,
    pub average: f64,
    pub strike_rate: f64,
    pub balls_faced: usize,
    pub fours: usize,
    pub sixes: usize,
}

#[derive(Debug, Default)]
struct BattingAcc {
    runs: u64,
    balls_faced: usize,
    matches: HashSet<u64>,
    fours: usize,
    sixes: usize,
}

/// Batting table, optionally narrowed to one batter (an empty name means no
/// filter). Sorted by total runs, ties in encounter order.
pub fn batting_stats(deliveries: &[DeliveryRecord], player: Option<&str>) -> Vec<BattingRow> {
    let player = player.filter(|p| !p.is_empty());
    let rows = deliveries
        .iter()
        .filter(|d| player.is_none_or(|p| d.batter == p));

    let grouped: Grouped<&str, BattingAcc> = Grouped::fold(
        rows,
        |d| d.batter.as_str(),
        |acc: &mut BattingAcc, d| {
            acc.runs += u64::from(d.batsman_runs);
            if d.is_ball_faced() {
                acc.balls_faced += 1;
            }
            acc.matches.insert(d.match_id);
            match d.batsman_runs {
                4 => acc.fours += 1,
                6 => acc.sixes += 1,
                _ => {}
            }
        },
    );

    let mut out: Vec<BattingRow> = grouped
        .into_iter()
        .map(|(name, acc)| {
            let innings = acc.matches.len();
            BattingRow {
                player: name.to_string(),
                innings,
                total_runs: acc.runs,
                average: safe_ratio(acc.runs as f64, innings as f64, 2),
                strike_rate: safe_percentage(acc.runs as f64, acc.balls_faced as f64, 2),
                balls_faced: acc.balls_faced,
                fours: acc.fours,
                sixes: acc.sixes,
            }
        })
        .collect();

    out.sort_by(|a, b| b.total_runs.cmp(&a.total_runs));
    out
}

/// First `n` rows of the full batting table; `n` past the end returns everything.
pub fn top_run_scorers(deliveries: &[DeliveryRecord], n: usize) -> Vec<BattingRow> {
    let mut rows = batting_stats(deliveries, None);
    rows.truncate(n);
    rows
}
