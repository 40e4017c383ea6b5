//! SQLite storage implementation for weather snapshots.

mod model;
mod repository;

pub use model::{DateWeatherDB, NewDateWeatherDB};
pub use repository::DateWeatherRepository;
