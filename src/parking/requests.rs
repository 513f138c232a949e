use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}
