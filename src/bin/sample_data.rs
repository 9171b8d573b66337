use std::path::PathBuf;

use anyhow::{Context, Result};

use cricket_terminal::config::{AppConfig, arg_value, init_cli_logging};
use cricket_terminal::fake_data::{FakeConfig, generate, write_dataset};

fn main() -> Result<()> {
    init_cli_logging();
    let cfg = AppConfig::from_env();
    let out_dir = arg_value("out-dir")
        .map(PathBuf::from)
        .unwrap_or(cfg.data_dir);

    let mut fake = FakeConfig::default();
    if let Some(raw) = arg_value("seasons") {
        fake.seasons = raw.parse::<usize>().context("--seasons must be an integer")?;
    }
    if let Some(raw) = arg_value("seed") {
        fake.seed = raw.parse::<u64>().context("--seed must be an integer")?;
    }

    let data = generate(fake);
    write_dataset(&out_dir, &data)?;

    println!("Sample dataset written to {}", out_dir.display());
    println!("Matches: {}", data.matches.len());
    println!("Deliveries: {}", data.deliveries.len());
    Ok(())
}
