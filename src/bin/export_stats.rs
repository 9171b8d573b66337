use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use cricket_terminal::config::{AppConfig, arg_value, init_cli_logging};
use cricket_terminal::dataset::load_data;
use cricket_terminal::export::{ExportFormat, StatsReport, export};

fn main() -> Result<()> {
    init_cli_logging();
    let cfg = AppConfig::from_env().with_data_dir(arg_value("data-dir").map(PathBuf::from));

    let format = match arg_value("format") {
        Some(raw) => ExportFormat::parse(&raw).ok_or_else(|| anyhow!("unknown format `{raw}`"))?,
        None => ExportFormat::Xlsx,
    };
    let limit = arg_value("top")
        .map(|raw| raw.parse::<usize>())
        .transpose()
        .context("--top must be a non-negative integer")?;
    let out = arg_value("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("cricket_stats.{}", format.extension())));

    let data = load_data(&cfg.data_dir)
        .with_context(|| format!("loading dataset from {}", cfg.data_dir.display()))?
        .ok_or_else(|| anyhow!("no data files in {}", cfg.data_dir.display()))?;

    let report = StatsReport::build(&data, limit);
    let summary = export(&out, format, &report)?;

    println!("Export complete");
    println!("File: {}", out.display());
    println!("Sheets: {}", summary.sheets);
    println!("Rows: {}", summary.rows);
    Ok(())
}
