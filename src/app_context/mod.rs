use crate::cli::Args;
use crate::storage::interface::{ParkingStore, StorageError};
use crate::storage::sqlite::SqliteParkingStorage;

#[derive(Clone)]
pub struct AppContext<PS: ParkingStore> {
    pub parking: PS,
}

pub fn init(args: &Args) -> Result<AppContext<SqliteParkingStorage>, StorageError> {
    let parking = SqliteParkingStorage::open(&args.database)?;
    tracing::info!(database = %args.database.display(), "Opened the parking database.");
    Ok(AppContext { parking })
}
