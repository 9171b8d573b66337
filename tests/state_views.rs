use std::path::PathBuf;

use cricket_terminal::config::AppConfig;
use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::state::{AppState, PlayerPanel, Screen, TeamFocus};

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("ipl");
    load_data(&path)
        .expect("fixture should load")
        .expect("fixture files should exist")
}

fn loaded_state(data: &Dataset) -> AppState {
    let mut state = AppState::new(&AppConfig::default());
    state.load(data);
    state
}

#[test]
fn digits_map_to_pages() {
    assert_eq!(Screen::from_digit('1'), Some(Screen::Home));
    assert_eq!(Screen::from_digit('5'), Some(Screen::Compare));
    assert_eq!(Screen::from_digit('0'), None);
    assert_eq!(Screen::from_digit('6'), None);
}

#[test]
fn player_selection_refreshes_metrics() {
    let data = fixture_dataset();
    let mut state = loaded_state(&data);
    assert!(state.has_data());
    state.screen = Screen::Players;

    assert_eq!(state.selected_player(), Some("A Kumar"));
    assert_eq!(state.player_batting.as_ref().map(|r| r.total_runs), Some(15));
    assert!(state.player_bowling.is_none());

    state.select_prev(&data);
    assert_eq!(state.selected_player(), Some("Z Nair"));
    // bowled, never batted, no wickets
    assert!(state.player_batting.is_none());
    assert!(state.player_bowling.is_none());

    state.select_prev(&data);
    assert_eq!(state.selected_player(), Some("Y Khan"));
    assert_eq!(state.player_bowling.as_ref().map(|r| r.wickets), Some(1));

    state.cycle_focus();
    assert_eq!(state.player_panel, PlayerPanel::Bowling);
}

#[test]
fn same_team_on_both_sides_has_no_head_to_head() {
    let data = fixture_dataset();
    let mut state = loaded_state(&data);
    state.screen = Screen::Teams;

    assert_eq!(state.selected_team(), Some("Alpha"));
    assert_eq!(state.selected_opponent(), Some("Bravo"));
    assert_eq!(state.head_to_head.as_ref().map(|h| h.total_matches), Some(3));
    assert_eq!(state.team_seasons.len(), 2);
    assert_eq!(state.selected_team_row().map(|r| r.wins), Some(2));

    state.cycle_focus();
    assert_eq!(state.team_focus, TeamFocus::Opponent);
    state.select_prev(&data);
    assert_eq!(state.selected_opponent(), Some("Alpha"));
    assert!(state.head_to_head.is_none());
}

#[test]
fn compare_selection_is_capped() {
    let data = fixture_dataset();
    let mut state = loaded_state(&data);
    state.screen = Screen::Compare;

    state.toggle_compare(&data);
    assert_eq!(state.compare_selection, vec!["A Kumar"]);
    assert!(state.comparison.is_none());

    state.select_next(&data);
    state.toggle_compare(&data);
    let cmp = state.comparison.as_ref().expect("two players selected");
    assert_eq!(cmp.batting.len(), 2);

    for _ in 0..4 {
        state.select_next(&data);
        state.toggle_compare(&data);
    }
    assert_eq!(state.compare_selection.len(), 5);
    assert!(state.logs.iter().any(|l| l.contains("at most 5")));

    // toggling an existing pick removes it
    state.compare_cursor = 0;
    state.toggle_compare(&data);
    assert!(!state.compare_selection.iter().any(|p| p == "A Kumar"));
}
