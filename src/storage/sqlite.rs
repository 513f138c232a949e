use crate::parking::models::{Coordinates, ParkingRecord};
use crate::storage::interface::{ParkingStore, StorageError};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The `slot` column is pinned to a single value, so the schema itself caps
/// the table at one row.
const CREATE_TABLE_QUERY: &str = "\
    CREATE TABLE IF NOT EXISTS parking_records (
        slot INTEGER PRIMARY KEY CHECK (slot = 0),
        id INTEGER NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        recorded_at TEXT NOT NULL
    )";

/// Upsert against the fixed singleton key. A replacement never goes through
/// an empty intermediate state, and the id advances so a new record never
/// reuses its predecessor's.
const REPLACE_QUERY: &str = "\
    INSERT INTO parking_records (slot, id, latitude, longitude, recorded_at)
    VALUES (0, 1, ?1, ?2, ?3)
    ON CONFLICT (slot) DO UPDATE SET
        id = parking_records.id + 1,
        latitude = excluded.latitude,
        longitude = excluded.longitude,
        recorded_at = excluded.recorded_at
    RETURNING id, latitude, longitude, recorded_at";

const CURRENT_QUERY: &str = "\
    SELECT id, latitude, longitude, recorded_at FROM parking_records WHERE slot = 0";

#[derive(Clone)]
pub struct SqliteParkingStorage {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteParkingStorage {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let connection = Connection::open(path).map_err(|source| StorageError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(connection)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, StorageError> {
        connection.execute(CREATE_TABLE_QUERY, [])?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn record_from_row(row: &Row<'_>) -> Result<ParkingRecord, rusqlite::Error> {
        Ok(ParkingRecord {
            id: row.get(0)?,
            latitude: row.get(1)?,
            longitude: row.get(2)?,
            recorded_at: row.get(3)?,
        })
    }
}

#[async_trait]
impl ParkingStore for SqliteParkingStorage {
    async fn current(&self) -> Result<Option<ParkingRecord>, StorageError> {
        let connection = self.connection.lock().await;
        let record = connection
            .query_row(CURRENT_QUERY, [], Self::record_from_row)
            .optional()?;
        Ok(record)
    }

    async fn replace(&self, coordinates: Coordinates) -> Result<ParkingRecord, StorageError> {
        coordinates.validate()?;
        let recorded_at = Utc::now();
        let connection = self.connection.lock().await;
        let record = connection.query_row(
            REPLACE_QUERY,
            params![coordinates.latitude, coordinates.longitude, recorded_at],
            Self::record_from_row,
        )?;
        Ok(record)
    }
}
