//! Data returned by weather providers.

use serde::{Deserialize, Serialize};

/// A single observation of current weather conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Short condition label, e.g. "Clear" or "Rain".
    pub condition: String,
    /// Provider icon code, e.g. "01d".
    pub icon: String,
    /// Temperature in Kelvin, as reported by the provider.
    pub temperature: f64,
}
