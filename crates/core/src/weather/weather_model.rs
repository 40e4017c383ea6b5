//! Weather snapshot domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skylog_weather::WeatherObservation;

/// A cached weather observation for a single calendar date.
///
/// Snapshots are written by the scheduled fetch and never updated for a
/// given date. Diary entries copy these fields at creation time; later
/// snapshot rows do not retroactively alter existing entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub condition: String,
    pub icon: String,
    pub temperature: f64,
}

impl WeatherSnapshot {
    /// Stamp a provider observation with the date it was taken for.
    pub fn from_observation(date: NaiveDate, observation: WeatherObservation) -> Self {
        Self {
            date,
            condition: observation.condition,
            icon: observation.icon,
            temperature: observation.temperature,
        }
    }
}
