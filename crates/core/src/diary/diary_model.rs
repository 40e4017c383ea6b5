//! Diary domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored diary entry.
///
/// The weather fields are a point-in-time copy taken when the entry was
/// created, not a live reference to a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: i32,
    pub date: NaiveDate,
    pub text: String,
    /// Condition label, serialized as `weather` to match the wire shape.
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

/// Input model for creating a new diary entry.
///
/// The surrogate id is assigned by storage on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDiaryEntry {
    pub date: NaiveDate,
    pub text: String,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

/// Bounds for the dates a diary operation will accept.
///
/// Both ends are inclusive. The defaults reject implausibly distant
/// dates in either direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiaryConfig {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            min_date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN),
            max_date: NaiveDate::from_ymd_opt(3049, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}
