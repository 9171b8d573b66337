use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use cricket_terminal::config::{AppConfig, arg_value, init_cli_logging};
use cricket_terminal::dataset::{
    Dataset, TableReport, TableStatus, deliveries_path, load_deliveries, load_matches,
    matches_path,
};
use cricket_terminal::summary::{DatasetSummary, integrity_warnings};

const PREVIEW_ROWS: usize = 3;
const MAX_WARNINGS: usize = 20;

fn main() -> Result<ExitCode> {
    init_cli_logging();
    let cfg = AppConfig::from_env().with_data_dir(arg_value("data-dir").map(PathBuf::from));
    println!("Validating dataset in {}", cfg.data_dir.display());

    let matches_file = matches_path(&cfg.data_dir);
    let deliveries_file = deliveries_path(&cfg.data_dir);
    let matches = load_matches(&matches_file);
    let deliveries = load_deliveries(&deliveries_file);

    let reports = [
        TableReport::of(&matches_file, &matches),
        TableReport::of(&deliveries_file, &deliveries),
    ];
    for report in &reports {
        print_report(report);
    }
    if !reports.iter().all(TableReport::is_loaded) {
        println!();
        println!("Validation failed");
        return Ok(ExitCode::FAILURE);
    }

    let (Ok(Some(matches)), Ok(Some(deliveries))) = (matches, deliveries) else {
        return Ok(ExitCode::FAILURE);
    };
    let data = Dataset {
        matches: matches.rows,
        deliveries: deliveries.rows,
    };

    print_summary(&DatasetSummary::compute(&data));

    let warnings = integrity_warnings(&data);
    println!();
    if warnings.is_empty() {
        println!("Integrity: no issues found");
    } else {
        println!("Integrity warnings: {}", warnings.len());
        for warning in warnings.iter().take(MAX_WARNINGS) {
            println!(" - {warning}");
        }
        if warnings.len() > MAX_WARNINGS {
            println!(" ... {} more", warnings.len() - MAX_WARNINGS);
        }
    }

    print_preview(&data);
    println!();
    println!("Validation passed");
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &TableReport) {
    println!();
    println!("{}", report.path.display());
    match &report.status {
        TableStatus::Loaded { rows, columns } => {
            println!("  rows: {rows}, columns: {}", columns.len());
            println!("  columns: {}", columns.join(", "));
        }
        TableStatus::Missing => println!("  MISSING: file not found"),
        TableStatus::Failed(message) => println!("  FAILED: {message}"),
    }
}

fn print_summary(s: &DatasetSummary) {
    println!();
    println!("Summary");
    println!("  matches: {}", s.total_matches);
    println!(
        "  seasons: {} ({} - {})",
        s.seasons,
        s.first_season.as_deref().unwrap_or("n/a"),
        s.last_season.as_deref().unwrap_or("n/a")
    );
    println!("  teams: {}", s.teams);
    println!("  venues: {}", s.venues);
    println!("  deliveries: {}", s.total_deliveries);
    println!("  matches with deliveries: {}", s.delivery_matches);
    println!("  batters: {}, bowlers: {}", s.batters, s.bowlers);
    println!("  runs: {}, wickets: {}", s.total_runs, s.total_wickets);
}

fn print_preview(data: &Dataset) {
    println!();
    println!("Sample matches");
    for m in data.matches.iter().take(PREVIEW_ROWS) {
        println!(
            "  #{} {} {} {} v {} -> {}",
            m.id,
            m.season,
            m.date,
            m.team1,
            m.team2,
            m.winner.as_deref().unwrap_or("no result")
        );
    }
    println!("Sample deliveries");
    for d in data.deliveries.iter().take(PREVIEW_ROWS) {
        println!(
            "  match {} inning {}: {} to {} runs={} extras={}{}",
            d.match_id,
            d.inning,
            d.bowler,
            d.batter,
            d.total_runs,
            d.extras_type,
            if d.is_wicket { " WICKET" } else { "" }
        );
    }
}
