use crate::parking::models::ParkingRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentLocationResponse {
    pub data: Option<ParkingRecord>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationSavedResponse {
    pub data: ParkingRecord,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
