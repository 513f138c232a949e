use crate::parking::models::{CoordinateError, Coordinates};
use crate::storage::interface::{ParkingStore, StorageError};
use crate::storage::sqlite::SqliteParkingStorage;
use chrono::Utc;

fn test_storage() -> SqliteParkingStorage {
    SqliteParkingStorage::open_in_memory().expect("Failed to open an in-memory database.")
}

#[tokio::test]
async fn test_fresh_storage_is_empty() {
    let storage = test_storage();

    let record = storage.current().await.expect("Reading should not fail.");

    assert_eq!(record, None);
}

#[tokio::test]
async fn test_replace_then_current_round_trips() {
    let storage = test_storage();
    let coordinates = Coordinates::new(45.0, 9.0).expect("Coordinates should be valid.");
    let before = Utc::now();

    let saved = storage
        .replace(coordinates)
        .await
        .expect("Saving should not fail.");
    let after = Utc::now();

    assert_eq!(saved.latitude, 45.0);
    assert_eq!(saved.longitude, 9.0);
    assert!(saved.recorded_at >= before);
    assert!(saved.recorded_at <= after);

    let current = storage.current().await.expect("Reading should not fail.");
    assert_eq!(current, Some(saved));
}

#[tokio::test]
async fn test_replace_discards_the_previous_record() {
    let storage = test_storage();
    let first = Coordinates::new(41.9028, 12.4964).expect("Coordinates should be valid.");
    let second = Coordinates::new(45.4642, 9.19).expect("Coordinates should be valid.");

    let first_record = storage
        .replace(first)
        .await
        .expect("Saving should not fail.");
    let second_record = storage
        .replace(second)
        .await
        .expect("Saving should not fail.");

    let current = storage.current().await.expect("Reading should not fail.");
    assert_eq!(current, Some(second_record));
    assert_ne!(first_record.id, second_record.id);
}

#[tokio::test]
async fn test_replace_revalidates_coordinates_defensively() {
    let storage = test_storage();
    // Bypasses `Coordinates::new` on purpose to simulate a careless caller.
    let invalid = Coordinates {
        latitude: 200.0,
        longitude: 12.0,
    };

    let outcome = storage.replace(invalid).await;

    assert!(matches!(
        outcome,
        Err(StorageError::InvalidCoordinates(
            CoordinateError::LatitudeOutOfRange(_)
        ))
    ));
    let current = storage.current().await.expect("Reading should not fail.");
    assert_eq!(current, None);
}

#[tokio::test]
async fn test_concurrent_replacements_leave_exactly_one_record() {
    let storage = test_storage();
    let written: Vec<Coordinates> = (0..10)
        .map(|index| {
            Coordinates::new(f64::from(index), f64::from(index) * 2.0)
                .expect("Coordinates should be valid.")
        })
        .collect();

    let mut tasks = Vec::new();
    for coordinates in written.clone() {
        let storage = storage.clone();
        tasks.push(tokio::spawn(async move {
            storage
                .replace(coordinates)
                .await
                .expect("Saving should not fail.")
        }));
    }
    for task in tasks {
        task.await.expect("The writer task should not panic.");
    }

    let current = storage.current().await.expect("Reading should not fail.");
    let record = current.expect("A location should be stored.");
    assert!(written
        .iter()
        .any(|coordinates| coordinates.latitude == record.latitude
            && coordinates.longitude == record.longitude));
    // Ten replacements happened, so the surviving record carries the tenth id.
    assert_eq!(record.id, 10);
}
