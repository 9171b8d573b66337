use std::collections::HashSet;

use serde::Serialize;

use crate::grouping::Grouped;
use crate::ratio::{round_to, safe_ratio};
use crate::records::DeliveryRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRow {
    pub player: String,
    pub matches: usize,
    pub wickets: usize,
    pub runs_conceded: u64,
    pub overs: f64,
    pub economy: f64,
    pub average: f64,
}

#[derive(Debug, Default)]
struct BowlingAcc {
    wickets: usize,
    runs_conceded: u64,
    legal_balls: usize,
    matches: HashSet<u64>,
}

/// Bowling table, optionally narrowed to one bowler. Sorted by wickets, ties in
/// encounter order.
///
/// Rows exist only for bowlers with at least one wicket: a bowler who sent
/// down deliveries without taking a wicket is left out of the table. This is
/// long-standing behaviour and probably a gap; the Players page says "no
/// bowling statistics" for such players.
pub fn bowling_stats(deliveries: &[DeliveryRecord], player: Option<&str>) -> Vec<BowlingRow> {
    let player = player.filter(|p| !p.is_empty());
    let rows = deliveries
        .iter()
        .filter(|d| player.is_none_or(|p| d.bowler == p));

    let grouped: Grouped<&str, BowlingAcc> = Grouped::fold(
        rows,
        |d| d.bowler.as_str(),
        |acc: &mut BowlingAcc, d| {
            if d.is_wicket {
                acc.wickets += 1;
            }
            acc.runs_conceded += u64::from(d.total_runs);
            if d.is_legal() {
                acc.legal_balls += 1;
            }
            acc.matches.insert(d.match_id);
        },
    );

    let mut out: Vec<BowlingRow> = grouped
        .into_iter()
        .filter(|(_, acc)| acc.wickets > 0)
        .map(|(name, acc)| {
            // Decimal overs, not the 4.3-style ball notation.
            let overs = round_to(acc.legal_balls as f64 / 6.0, 1);
            BowlingRow {
                player: name.to_string(),
                matches: acc.matches.len(),
                wickets: acc.wickets,
                runs_conceded: acc.runs_conceded,
                overs,
                economy: safe_ratio(acc.runs_conceded as f64, overs, 2),
                average: safe_ratio(acc.runs_conceded as f64, acc.wickets as f64, 2),
            }
        })
        .collect();

    out.sort_by(|a, b| b.wickets.cmp(&a.wickets));
    out
}

/// First `n` rows of the full bowling table.
pub fn top_wicket_takers(deliveries: &[DeliveryRecord], n: usize) -> Vec<BowlingRow> {
    let mut rows = bowling_stats(deliveries, None);
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ExtrasType;

    #[test]
    fn wicketless_bowler_is_absent() {
        let deliveries = vec![
            DeliveryRecord::ball(1, "A", "Quiet", 1),
            DeliveryRecord::ball(1, "A", "Strike", 0).wicket(),
        ];
        let rows = bowling_stats(&deliveries, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player, "Strike");
        assert!(bowling_stats(&deliveries, Some("Quiet")).is_empty());
    }

    #[test]
    fn illegal_deliveries_do_not_count_as_overs() {
        let mut deliveries: Vec<DeliveryRecord> =
            (0..6).map(|_| DeliveryRecord::ball(1, "A", "B", 1)).collect();
        deliveries.push(DeliveryRecord::ball(1, "A", "B", 0).with_extras(ExtrasType::Wides, 1));
        deliveries.push(DeliveryRecord::ball(1, "A", "B", 0).with_extras(ExtrasType::NoBalls, 1));
        deliveries.push(DeliveryRecord::ball(1, "A", "B", 0).wicket());

        let rows = bowling_stats(&deliveries, Some("B"));
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        // 7 legal balls -> 1.17 overs -> 1.2
        assert_eq!(row.overs, 1.2);
        assert_eq!(row.runs_conceded, 8);
        assert_eq!(row.economy, 6.67);
        assert_eq!(row.average, 8.0);
        assert_eq!(row.matches, 1);
    }
}
