//! Weather reading

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Current weather for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// °C
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
    /// ISO-8601 local time of the reading, e.g. `2024-05-01T14:00`
    pub time: String,
}

impl WeatherInfo {
    /// Parsed reading time, if the service sent a recognisable timestamp
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }
}
