use std::path::PathBuf;

use chrono::NaiveDate;

use cricket_terminal::compare::compare_players;
use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::error::StatsError;
use cricket_terminal::records::{DeliveryRecord, MatchRecord};
use cricket_terminal::summary::{DatasetSummary, integrity_warnings};

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("ipl");
    load_data(&path)
        .expect("fixture should load")
        .expect("fixture files should exist")
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn comparison_keeps_table_order() {
    let data = fixture_dataset();
    let cmp = compare_players(&data.deliveries, &names(&["Y Khan", "B Singh", "A Kumar", "X Rao"]))
        .expect("valid selection");
    let batters: Vec<&str> = cmp.batting.iter().map(|r| r.player.as_str()).collect();
    let bowlers: Vec<&str> = cmp.bowling.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(batters, vec!["A Kumar", "B Singh"]);
    assert_eq!(bowlers, vec!["X Rao", "Y Khan"]);
}

#[test]
fn comparison_size_is_bounded() {
    let data = fixture_dataset();
    assert_eq!(
        compare_players(&data.deliveries, &names(&["A Kumar"])),
        Err(StatsError::ComparisonSize(1))
    );
    assert_eq!(
        compare_players(&data.deliveries, &names(&["A Kumar", "A Kumar"])),
        Err(StatsError::ComparisonSize(1))
    );
    let six = names(&["A Kumar", "B Singh", "C Das", "X Rao", "Y Khan", "Z Nair"]);
    assert_eq!(
        compare_players(&data.deliveries, &six),
        Err(StatsError::ComparisonSize(6))
    );
}

#[test]
fn summary_of_fixture() {
    let data = fixture_dataset();
    let s = DatasetSummary::compute(&data);
    assert_eq!(s.total_matches, 5);
    assert_eq!(s.first_season.as_deref(), Some("2008"));
    assert_eq!(s.last_season.as_deref(), Some("2009"));
    assert_eq!(s.seasons, 2);
    assert_eq!(s.teams, 3);
    assert_eq!(s.venues, 3);
    assert_eq!(s.players, 6);
    assert_eq!(s.total_deliveries, 15);
    assert_eq!(s.delivery_matches, 3);
    assert_eq!((s.batters, s.bowlers), (3, 3));
    assert_eq!(s.total_runs, 29);
    assert_eq!(s.total_wickets, 3);
    assert!(integrity_warnings(&data).is_empty());
}

#[test]
fn integrity_warnings_flag_broken_rows() {
    let date = NaiveDate::from_ymd_opt(2020, 4, 1).expect("valid date");
    let mut bad_delivery = DeliveryRecord::ball(9, "A", "B", 4);
    bad_delivery.total_runs = 1;
    let data = Dataset {
        matches: vec![
            MatchRecord::new(1, "2020", date, "V", "X", "X"),
            MatchRecord::new(1, "2020", date, "V", "X", "Y").won_by("Z"),
        ],
        deliveries: vec![bad_delivery],
    };
    let warnings = integrity_warnings(&data);
    assert_eq!(warnings.len(), 5, "{warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("duplicate id")));
    assert!(warnings.iter().any(|w| w.contains("both X")));
    assert!(warnings.iter().any(|w| w.contains("winner Z")));
    assert!(warnings.iter().any(|w| w.contains("exceeds total_runs")));
    assert!(warnings.iter().any(|w| w.contains("unknown match 9")));
}
