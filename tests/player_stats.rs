use std::path::PathBuf;

use cricket_terminal::batting::{batting_stats, top_run_scorers};
use cricket_terminal::bowling::{bowling_stats, top_wicket_takers};
use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::records::DeliveryRecord;

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("ipl");
    load_data(&path)
        .expect("fixture should load")
        .expect("fixture files should exist")
}

#[test]
fn batting_table_from_fixture() {
    let data = fixture_dataset();
    let rows = batting_stats(&data.deliveries, None);
    let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(names, vec!["A Kumar", "B Singh", "C Das"]);

    let kumar = &rows[0];
    assert_eq!(kumar.total_runs, 15);
    assert_eq!(kumar.balls_faced, 5);
    assert_eq!(kumar.innings, 2);
    assert_eq!(kumar.average, 7.5);
    assert_eq!(kumar.strike_rate, 300.0);
    assert_eq!((kumar.fours, kumar.sixes), (2, 1));

    // no-balls still count as balls faced
    let singh = &rows[1];
    assert_eq!(singh.total_runs, 9);
    assert_eq!(singh.balls_faced, 5);
    assert_eq!(singh.innings, 3);
    assert_eq!(singh.average, 3.0);
    assert_eq!(singh.strike_rate, 180.0);

    let das = &rows[2];
    assert_eq!(das.total_runs, 2);
    assert_eq!(das.balls_faced, 4);
    assert_eq!(das.strike_rate, 50.0);
}

#[test]
fn strike_rate_matches_runs_over_balls() {
    let data = fixture_dataset();
    for row in batting_stats(&data.deliveries, None) {
        if row.balls_faced > 0 {
            let expected =
                (row.total_runs as f64 / row.balls_faced as f64 * 100.0 * 100.0).round() / 100.0;
            assert_eq!(row.strike_rate, expected, "{}", row.player);
        }
    }
}

#[test]
fn batting_filter_narrows_to_one_player() {
    let data = fixture_dataset();
    let rows = batting_stats(&data.deliveries, Some("B Singh"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player, "B Singh");
    assert!(batting_stats(&data.deliveries, Some("Nobody")).is_empty());
}

#[test]
fn bowling_table_from_fixture() {
    let data = fixture_dataset();
    let rows = bowling_stats(&data.deliveries, None);
    let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    // Z Nair bowled but took no wicket.
    assert_eq!(names, vec!["X Rao", "Y Khan"]);

    let rao = &rows[0];
    assert_eq!(rao.wickets, 2);
    assert_eq!(rao.runs_conceded, 21);
    assert_eq!(rao.overs, 1.0);
    assert_eq!(rao.economy, 21.0);
    assert_eq!(rao.average, 10.5);
    assert_eq!(rao.matches, 2);

    let khan = &rows[1];
    assert_eq!(khan.wickets, 1);
    assert_eq!(khan.runs_conceded, 7);
    assert_eq!(khan.economy, 7.0);
    assert!(bowling_stats(&data.deliveries, Some("Z Nair")).is_empty());
}

#[test]
fn top_n_past_the_end_returns_everything() {
    let data = fixture_dataset();
    assert_eq!(top_run_scorers(&data.deliveries, 100).len(), 3);
    assert_eq!(top_run_scorers(&data.deliveries, 1)[0].player, "A Kumar");
    assert_eq!(top_wicket_takers(&data.deliveries, 100).len(), 2);
    assert!(top_wicket_takers(&data.deliveries, 0).is_empty());
}

#[test]
fn five_batters_top_hundred() {
    let deliveries: Vec<DeliveryRecord> = ["P1", "P2", "P3", "P4", "P5"]
        .iter()
        .enumerate()
        .map(|(idx, name)| DeliveryRecord::ball(1, *name, "Bowler", idx as u32))
        .collect();
    let rows = top_run_scorers(&deliveries, 100);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].player, "P5");
}

#[test]
fn ties_keep_first_encounter_order() {
    let deliveries = vec![
        DeliveryRecord::ball(1, "Late", "B", 2),
        DeliveryRecord::ball(1, "Early", "B", 4),
        DeliveryRecord::ball(1, "Late", "B", 2),
        DeliveryRecord::ball(2, "Other", "B", 1),
    ];
    let rows = batting_stats(&deliveries, None);
    let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(names, vec!["Late", "Early", "Other"]);
}

#[test]
fn engine_calls_are_repeatable() {
    let data = fixture_dataset();
    assert_eq!(
        batting_stats(&data.deliveries, None),
        batting_stats(&data.deliveries, None)
    );
    assert_eq!(
        bowling_stats(&data.deliveries, None),
        bowling_stats(&data.deliveries, None)
    );
}

#[test]
fn average_on_a_tie_rounds_to_even() {
    let runs = [13, 13, 13, 13, 13, 13, 13, 10];
    let deliveries: Vec<DeliveryRecord> = runs
        .iter()
        .enumerate()
        .map(|(idx, r)| DeliveryRecord::ball(idx as u64 + 1, "Tie", "B", *r))
        .collect();
    let rows = batting_stats(&deliveries, None);
    assert_eq!(rows[0].total_runs, 101);
    assert_eq!(rows[0].innings, 8);
    assert_eq!(rows[0].average, 12.62);
}
