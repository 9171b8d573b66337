use std::fs;
use std::path::PathBuf;

use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::export::{ExportFormat, StatsReport, export};

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
fn report_limit_caps_player_tables() {
    let data = fixture_dataset();
    let report = StatsReport::build(&data, Some(1));
    assert_eq!(report.batting.len(), 1);
    assert_eq!(report.bowling.len(), 1);
    assert_eq!(report.teams.len(), 3);
    assert!(report.toss_impact.is_some());

    let empty = StatsReport::build(&Dataset::default(), None);
    assert!(empty.toss_impact.is_none());
}

#[test]
fn json_export_round_trips_through_serde() {
    let data = fixture_dataset();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stats.json");
    let report = StatsReport::build(&data, None);

    let summary = export(&path, ExportFormat::Json, &report).expect("export json");
    assert_eq!(summary.sheets, 1);

    let raw = fs::read_to_string(&path).expect("read export");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["batting"][0]["player"], "A Kumar");
    assert_eq!(value["toss_impact"]["win_percentage"], 60.0);
    assert_eq!(value["season_winners"][0]["winner"], "Charlie");
}

#[test]
fn xlsx_export_writes_every_sheet() {
    let data = fixture_dataset();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stats.xlsx");
    let report = StatsReport::build(&data, None);

    let summary = export(&path, ExportFormat::Xlsx, &report).expect("export xlsx");
    assert_eq!(summary.sheets, 7);
    assert!(path.exists());
}

#[test]
fn format_names() {
    assert_eq!(ExportFormat::parse("XLSX"), Some(ExportFormat::Xlsx));
    assert_eq!(ExportFormat::parse("json"), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::parse("csv"), None);
}
