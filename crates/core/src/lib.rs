//! Skylog Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the weather diary.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate. The external weather
//! provider lives in the `skylog-weather` crate and is consumed here
//! through its `CurrentWeatherProvider` trait.

pub mod diary;
pub mod errors;
pub mod weather;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
