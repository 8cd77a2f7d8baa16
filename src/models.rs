use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use crate::serialize_timestamp;

/// One weather reading for a farm coordinate
#[derive(Serialize, Deserialize, Clone)]
pub struct Observation {
    #[serde(with = "serialize_timestamp")]
    pub timestamp: DateTime<Local>,
    pub temp: f64,
    pub wind_speed: f64,
    pub humidity: f64,
}
