use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::batting::DEFAULT_TOP_N;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PLAYER_TOP_N: usize = 15;
const DEFAULT_VENUE_ROWS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Home page rankings length.
    pub top_n: usize,
    /// Players page top tables length.
    pub player_top_n: usize,
    pub venue_rows: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            top_n: DEFAULT_TOP_N,
            player_top_n: DEFAULT_PLAYER_TOP_N,
            venue_rows: DEFAULT_VENUE_ROWS,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Read `CRICKET_*` variables, after seeding the environment from
    /// `.env.local` and `.env` when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");

        let defaults = Self::default();
        Self {
            data_dir: env::var("CRICKET_DATA_DIR")
                .ok()
                .filter(|val| !val.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            top_n: usize_env("CRICKET_TOP_N")
                .unwrap_or(defaults.top_n)
                .clamp(1, 50),
            player_top_n: usize_env("CRICKET_PLAYER_TOP_N")
                .unwrap_or(defaults.player_top_n)
                .clamp(1, 50),
            venue_rows: usize_env("CRICKET_VENUE_ROWS")
                .unwrap_or(defaults.venue_rows)
                .clamp(1, 100),
            log_file: env::var("CRICKET_LOG_FILE")
                .ok()
                .filter(|val| !val.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// `--data-dir` beats `CRICKET_DATA_DIR`.
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }
}

fn usize_env(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|val| val.trim().parse::<usize>().ok())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Console logging for the command-line tools.
pub fn init_cli_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The terminal UI owns stdout, so it only logs when pointed at a file.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
    Ok(())
}

/// `--name=value` or `--name value` from the process arguments.
pub fn arg_value(name: &str) -> Option<String> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    find_arg_value(&args, name)
}

pub fn find_arg_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("--{name}=");
    let flag = format!("--{name}");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if *arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::find_arg_value;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn arg_value_accepts_both_forms() {
        assert_eq!(
            find_arg_value(&args(&["--data-dir=/tmp/ipl"]), "data-dir").as_deref(),
            Some("/tmp/ipl")
        );
        assert_eq!(
            find_arg_value(&args(&["--top", "5"]), "top").as_deref(),
            Some("5")
        );
        assert_eq!(find_arg_value(&args(&["--top"]), "top"), None);
        assert_eq!(find_arg_value(&args(&["--topper=3"]), "top"), None);
    }
}
