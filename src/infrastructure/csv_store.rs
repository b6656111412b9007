use crate::domain::entities::position::PortfolioPosition;
use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::entities::watchlist::WatchlistEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::portfolio_store::PortfolioStore;
use crate::domain::ports::watchlist_store::WatchlistStore;
use std::path::{Path, PathBuf};

/// Watchlist rows in a flat CSV file with a header row.
/// A missing file reads as an empty watchlist.
pub struct CsvWatchlistStore {
    path: PathBuf,
}

impl CsvWatchlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WatchlistStore for CsvWatchlistStore {
    fn load(&self) -> Result<Vec<WatchlistEntry>, DomainError> {
        load_rows(&self.path)
    }

    fn save(&self, entries: &[WatchlistEntry]) -> Result<(), DomainError> {
        save_rows(&self.path, entries)
    }
}

/// Portfolio rows in a flat CSV file with a header row.
pub struct CsvPortfolioStore {
    path: PathBuf,
}

impl CsvPortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PortfolioStore for CsvPortfolioStore {
    fn load(&self) -> Result<Vec<PortfolioPosition>, DomainError> {
        load_rows(&self.path)
    }

    fn save(&self, positions: &[PortfolioPosition]) -> Result<(), DomainError> {
        save_rows(&self.path, positions)
    }
}

fn load_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
    if !path.exists() {
        return Ok(vec![]);
    }
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))?);
    }
    Ok(rows)
}

fn save_rows<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<(), DomainError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Storage(format!("{}: {e}", parent.display())))?;
        }
    }
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| DomainError::Storage(format!("{}: {e}", path.display())))
}

/// Export scan rows for spreadsheet use.
pub fn write_quotes_csv(path: &Path, rows: &[InstrumentQuote]) -> Result<(), DomainError> {
    save_rows(path, rows)
}
