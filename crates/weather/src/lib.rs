//! Weather provider client for Skylog.
//!
//! This crate owns the single outbound network dependency of the diary:
//! the current-conditions endpoint of OpenWeatherMap. Consumers depend on
//! the [`CurrentWeatherProvider`] trait rather than the concrete client,
//! so tests can substitute a canned provider.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::WeatherError;
pub use models::WeatherObservation;
pub use provider::{CurrentWeatherProvider, OpenWeatherMapProvider};
