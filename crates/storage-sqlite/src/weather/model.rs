//! Database models for weather snapshots.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use skylog_core::weather::WeatherSnapshot;

/// Database model for a cached weather observation.
///
/// The surrogate id exists only for storage ordering; the domain model
/// has no use for it.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::date_weather)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DateWeatherDB {
    pub id: i32,
    pub date: NaiveDate,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

/// Database model for inserting a new weather snapshot.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::date_weather)]
pub struct NewDateWeatherDB {
    pub date: NaiveDate,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

// Conversion to domain models
impl From<DateWeatherDB> for WeatherSnapshot {
    fn from(db: DateWeatherDB) -> Self {
        Self {
            date: db.date,
            condition: db.weather,
            icon: db.icon,
            temperature: db.temperature,
        }
    }
}

impl From<WeatherSnapshot> for NewDateWeatherDB {
    fn from(domain: WeatherSnapshot) -> Self {
        Self {
            date: domain.date,
            weather: domain.condition,
            icon: domain.icon,
            temperature: domain.temperature,
        }
    }
}
