use crate::parking::models::{CoordinateError, Coordinates, ParkingRecord};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Singleton-slot storage for the current parking location.
///
/// Implementations must guarantee that at most one record survives any
/// sequence of `replace` calls, including concurrent ones, and that readers
/// never observe an intermediate state of a replacement in progress.
#[async_trait]
pub trait ParkingStore: Send + Sync {
    /// Returns the stored record, or `None` if nothing has been saved yet.
    /// Absence is not an error.
    async fn current(&self) -> Result<Option<ParkingRecord>, StorageError>;

    /// Atomically supersedes any previously stored record. Assigns the new
    /// record its id and `recorded_at` timestamp and returns it. The previous
    /// record is discarded for good; no history is kept.
    ///
    /// Coordinates are re-validated here even though the HTTP layer validates
    /// first. The store never trusts its caller.
    async fn replace(&self, coordinates: Coordinates) -> Result<ParkingRecord, StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open the parking database at {path}: {source}")]
    OpenDatabase {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("the store rejected the coordinates: {0}")]
    InvalidCoordinates(#[from] CoordinateError),
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}
