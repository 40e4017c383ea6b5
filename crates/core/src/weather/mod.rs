//! Weather snapshots - cached observations, one row per calendar date.

mod weather_model;
mod weather_traits;

pub use weather_model::WeatherSnapshot;
pub use weather_traits::WeatherSnapshotRepositoryTrait;
