use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::DatasetError;
use crate::records::{DELIVERY_COLUMNS, DeliveryRecord, MATCH_COLUMNS, MatchRecord};

pub const MATCHES_FILE: &str = "matches.csv";
pub const DELIVERIES_FILE: &str = "deliveries.csv";

static SHARED: OnceCell<Option<Dataset>> = OnceCell::new();

/// Both source tables, held read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub matches: Vec<MatchRecord>,
    pub deliveries: Vec<DeliveryRecord>,
}

/// One parsed CSV file plus the header it was read with.
#[derive(Debug, Clone)]
pub struct Table<T> {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<T>,
}

/// Outcome of loading one table, condensed for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub path: PathBuf,
    pub status: TableStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    Loaded { rows: usize, columns: Vec<String> },
    Missing,
    Failed(String),
}

impl TableReport {
    pub fn of<T>(path: &Path, result: &Result<Option<Table<T>>, DatasetError>) -> Self {
        let status = match result {
            Ok(Some(table)) => TableStatus::Loaded {
                rows: table.rows.len(),
                columns: table.columns.clone(),
            },
            Ok(None) => TableStatus::Missing,
            Err(err) => TableStatus::Failed(err.to_string()),
        };
        Self {
            path: path.to_path_buf(),
            status,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, TableStatus::Loaded { .. })
    }
}

pub fn matches_path(dir: &Path) -> PathBuf {
    dir.join(MATCHES_FILE)
}

pub fn deliveries_path(dir: &Path) -> PathBuf {
    dir.join(DELIVERIES_FILE)
}

/// Load `matches.csv` and `deliveries.csv` from `dir`.
///
/// `Ok(None)` means at least one file does not exist ("no data"); callers show
/// that instead of running any statistics. Unreadable or malformed files are
/// errors.
pub fn load_data(dir: &Path) -> Result<Option<Dataset>, DatasetError> {
    let Some(matches) = load_matches(&matches_path(dir))? else {
        return Ok(None);
    };
    let Some(deliveries) = load_deliveries(&deliveries_path(dir))? else {
        return Ok(None);
    };
    Ok(Some(Dataset {
        matches: matches.rows,
        deliveries: deliveries.rows,
    }))
}

pub fn load_matches(path: &Path) -> Result<Option<Table<MatchRecord>>, DatasetError> {
    read_table(path, MATCH_COLUMNS)
}

pub fn load_deliveries(path: &Path) -> Result<Option<Table<DeliveryRecord>>, DatasetError> {
    read_table(path, DELIVERY_COLUMNS)
}

/// Process-wide cached load. The first call reads from `dir`; every later call
/// returns that same result whatever directory it names.
pub fn shared_dataset(dir: &Path) -> Result<Option<&'static Dataset>, DatasetError> {
    SHARED
        .get_or_try_init(|| load_data(dir))
        .map(Option::as_ref)
}

fn read_table<T: DeserializeOwned>(
    path: &Path,
    required: &[&str],
) -> Result<Option<Table<T>>, DatasetError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "data file not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);
    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(path, err))?
        .iter()
        .map(str::to_string)
        .collect();
    if let Some(missing) = required
        .iter()
        .find(|col| !columns.iter().any(|c| c == *col))
    {
        return Err(DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }
    debug!(path = %path.display(), columns = columns.len(), "header ok");

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.map_err(|err| csv_error(path, err))?);
    }
    info!(path = %path.display(), rows = rows.len(), "loaded table");

    Ok(Some(Table {
        path: path.to_path_buf(),
        columns,
        rows,
    }))
}

fn csv_error(path: &Path, err: csv::Error) -> DatasetError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => DatasetError::Malformed {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}
