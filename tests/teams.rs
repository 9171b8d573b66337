use std::path::PathBuf;

use chrono::NaiveDate;

use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::records::MatchRecord;
use cricket_terminal::team_stats::{head_to_head, team_performance_by_season, team_stats};

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("ipl");
    load_data(&path)
        .expect("fixture should load")
        .expect("fixture files should exist")
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, d).expect("valid date")
}

#[test]
fn team_table_from_fixture() {
    let data = fixture_dataset();
    let rows = team_stats(&data.matches);
    let summary: Vec<(&str, usize, usize, f64)> = rows
        .iter()
        .map(|r| (r.team.as_str(), r.matches_played, r.wins, r.win_percentage))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Alpha", 4, 2, 50.0),
            ("Bravo", 4, 1, 25.0),
            ("Charlie", 2, 1, 50.0),
        ]
    );
    assert_eq!(rows[1].losses(), 3);
}

#[test]
fn wins_never_exceed_matches() {
    let data = fixture_dataset();
    let rows = team_stats(&data.matches);
    let total_wins: usize = rows.iter().map(|r| r.wins).sum();
    assert!(total_wins <= data.matches.len());
    for row in &rows {
        assert!(row.wins <= row.matches_played, "{}", row.team);
    }
}

#[test]
fn winner_outside_the_pair_gets_no_row() {
    let matches = vec![MatchRecord::new(1, "2020", day(1), "V", "X", "Y").won_by("Z")];
    let rows = team_stats(&matches);
    assert!(rows.iter().all(|r| r.team != "Z"));
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!((row.matches_played, row.wins), (1, 0), "{}", row.team);
        assert!(row.wins <= row.matches_played);
    }
}

#[test]
fn head_to_head_counts_both_orientations() {
    let matches = vec![
        MatchRecord::new(1, "2020", day(1), "V", "X", "Y").won_by("X"),
        MatchRecord::new(2, "2020", day(2), "V", "Y", "X").won_by("Y"),
    ];
    let h2h = head_to_head(&matches, "X", "Y");
    assert_eq!(
        (h2h.total_matches, h2h.team1_wins, h2h.team2_wins, h2h.ties),
        (2, 1, 1, 0)
    );
}

#[test]
fn head_to_head_from_fixture() {
    let data = fixture_dataset();
    let h2h = head_to_head(&data.matches, "Alpha", "Bravo");
    assert_eq!(
        (h2h.total_matches, h2h.team1_wins, h2h.team2_wins, h2h.ties),
        (3, 2, 1, 0)
    );

    // the washed-out match lands in ties
    let h2h = head_to_head(&data.matches, "Bravo", "Charlie");
    assert_eq!((h2h.total_matches, h2h.ties), (1, 1));

    let none = head_to_head(&data.matches, "Alpha", "Nobody");
    assert_eq!(none.total_matches, 0);
}

#[test]
fn season_performance_for_one_team() {
    let data = fixture_dataset();
    let rows = team_performance_by_season(&data.matches, "Alpha");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].season, "2008");
    assert_eq!((rows[0].matches, rows[0].wins), (3, 1));
    assert_eq!(rows[0].win_rate, 33.33);
    assert_eq!(rows[1].season, "2009");
    assert_eq!(rows[1].win_rate, 100.0);

    assert!(team_performance_by_season(&data.matches, "Nobody").is_empty());
}
