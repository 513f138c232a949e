use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single persisted parking location. At most one of these exists at any
/// time; saving a new one supersedes the previous one entirely.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRecord {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

/// A latitude/longitude pair in decimal degrees, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// NaN and infinities fail the range comparisons, so finiteness is
    /// checked explicitly to report them under the right variant.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude must be a finite number in [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must be a finite number in [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),
}
