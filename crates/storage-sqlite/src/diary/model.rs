//! Database models for diary entries.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use skylog_core::diary::{DiaryEntry, NewDiaryEntry};

/// Database model for a diary row.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::diary)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DiaryEntryDB {
    pub id: i32,
    pub date: NaiveDate,
    pub text: String,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

/// Database model for inserting a new diary row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::diary)]
pub struct NewDiaryEntryDB {
    pub date: NaiveDate,
    pub text: String,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

// Conversion to domain models
impl From<DiaryEntryDB> for DiaryEntry {
    fn from(db: DiaryEntryDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            text: db.text,
            weather: db.weather,
            icon: db.icon,
            temperature: db.temperature,
        }
    }
}

impl From<NewDiaryEntry> for NewDiaryEntryDB {
    fn from(domain: NewDiaryEntry) -> Self {
        Self {
            date: domain.date,
            text: domain.text,
            weather: domain.weather,
            icon: domain.icon,
            temperature: domain.temperature,
        }
    }
}
