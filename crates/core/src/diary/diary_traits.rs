use async_trait::async_trait;
use chrono::NaiveDate;

use crate::diary::diary_model::{DiaryEntry, NewDiaryEntry};
use crate::errors::Result;

/// Trait for diary repository operations.
///
/// Reads are synchronous against the pool; writes go through the
/// storage layer's single-writer path. "Storage order" means the order
/// rows were inserted.
#[async_trait]
pub trait DiaryRepositoryTrait: Send + Sync {
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>>;

    /// All entries with date in the inclusive range `[start, end]`.
    /// An inverted range yields an empty list, not an error.
    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DiaryEntry>>;

    /// The first entry for `date` in storage order, if any.
    fn find_first_by_date(&self, date: NaiveDate) -> Result<Option<DiaryEntry>>;

    async fn save(&self, new_entry: NewDiaryEntry) -> Result<DiaryEntry>;

    /// Overwrite the text of a single entry.
    async fn update_text(&self, entry_id: i32, text: &str) -> Result<()>;

    /// Delete every entry for `date`, returning the number removed.
    async fn delete_all_by_date(&self, date: NaiveDate) -> Result<usize>;
}

/// Trait for diary service operations.
#[async_trait]
pub trait DiaryServiceTrait: Send + Sync {
    /// Record a diary entry for `date`, enriched with that date's weather.
    async fn create_diary(&self, date: NaiveDate, text: &str) -> Result<()>;

    /// All entries for `date`, in storage order.
    fn read_diary(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>>;

    /// All entries in the inclusive range `[start, end]`, in storage order.
    fn read_diaries(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DiaryEntry>>;

    /// Rewrite the text of the first entry for `date`.
    async fn update_diary(&self, date: NaiveDate, text: &str) -> Result<()>;

    /// Remove all entries for `date`. Idempotent.
    async fn delete_diary(&self, date: NaiveDate) -> Result<()>;

    /// Fetch current conditions and persist a snapshot dated today.
    async fn save_todays_weather(&self) -> Result<()>;
}
