use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the source tables. A missing file is not an error;
/// the loader reports it as "no data" instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{} line {line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("toss impact needs at least one match")]
    EmptyMatchTable,
    #[error("player comparison needs 2 to 5 distinct players, got {0}")]
    ComparisonSize(usize),
}
