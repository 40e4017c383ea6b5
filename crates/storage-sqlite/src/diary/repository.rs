use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::model::{DiaryEntryDB, NewDiaryEntryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::diary::dsl::*;
use skylog_core::diary::{DiaryEntry, DiaryRepositoryTrait, NewDiaryEntry};
use skylog_core::errors::Result;

pub struct DiaryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DiaryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DiaryRepository { pool, writer }
    }
}

#[async_trait]
impl DiaryRepositoryTrait for DiaryRepository {
    fn find_by_date(&self, target_date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = diary
            .filter(date.eq(target_date))
            .order(id.asc())
            .load::<DiaryEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(DiaryEntry::from).collect())
    }

    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DiaryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        // between is inclusive on both ends; an inverted range simply
        // matches nothing
        let rows = diary
            .filter(date.between(start, end))
            .order(id.asc())
            .load::<DiaryEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(DiaryEntry::from).collect())
    }

    fn find_first_by_date(&self, target_date: NaiveDate) -> Result<Option<DiaryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let row = diary
            .filter(date.eq(target_date))
            .order(id.asc())
            .first::<DiaryEntryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(DiaryEntry::from))
    }

    async fn save(&self, new_entry: NewDiaryEntry) -> Result<DiaryEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DiaryEntry> {
                let new_db: NewDiaryEntryDB = new_entry.into();
                let result_db = diesel::insert_into(diary)
                    .values(&new_db)
                    .returning(DiaryEntryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(DiaryEntry::from(result_db))
            })
            .await
    }

    async fn update_text(&self, entry_id: i32, new_text: &str) -> Result<()> {
        let new_text = new_text.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(diary.find(entry_id))
                    .set(text.eq(new_text))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_all_by_date(&self, target_date: NaiveDate) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(diary.filter(date.eq(target_date)))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use tempfile::TempDir;

    fn entry(entry_date: &str, entry_text: &str) -> NewDiaryEntry {
        NewDiaryEntry {
            date: entry_date.parse().unwrap(),
            text: entry_text.to_string(),
            weather: "sunny".to_string(),
            icon: "A01".to_string(),
            temperature: 20.0,
        }
    }

    fn setup() -> (DiaryRepository, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("test.db");
        let pool = create_pool(db_path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());
        (DiaryRepository::new(pool, writer), tmp)
    }

    #[tokio::test]
    async fn save_and_find_preserve_insertion_order() {
        let (repo, _tmp) = setup();

        repo.save(entry("2023-03-15", "Wow")).await.unwrap();
        repo.save(entry("2023-03-15", "oh")).await.unwrap();
        repo.save(entry("2023-03-16", "other day")).await.unwrap();

        let found = repo.find_by_date("2023-03-15".parse().unwrap()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "Wow");
        assert_eq!(found[1].text, "oh");
        assert!(found[0].id < found[1].id);
    }

    #[tokio::test]
    async fn find_by_date_range_is_inclusive() {
        let (repo, _tmp) = setup();

        repo.save(entry("2023-03-01", "start")).await.unwrap();
        repo.save(entry("2023-03-08", "middle")).await.unwrap();
        repo.save(entry("2023-03-15", "end")).await.unwrap();
        repo.save(entry("2023-03-16", "outside")).await.unwrap();

        let found = repo
            .find_by_date_range("2023-03-01".parse().unwrap(), "2023-03-15".parse().unwrap())
            .unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].text, "start");
        assert_eq!(found[2].text, "end");
    }

    #[tokio::test]
    async fn inverted_range_matches_nothing() {
        let (repo, _tmp) = setup();
        repo.save(entry("2023-03-08", "middle")).await.unwrap();

        let found = repo
            .find_by_date_range("2023-03-15".parse().unwrap(), "2023-03-01".parse().unwrap())
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn find_first_by_date_takes_the_oldest_row() {
        let (repo, _tmp) = setup();

        repo.save(entry("2023-03-15", "first")).await.unwrap();
        repo.save(entry("2023-03-15", "second")).await.unwrap();

        let first = repo
            .find_first_by_date("2023-03-15".parse().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(first.text, "first");

        assert!(repo
            .find_first_by_date("2023-04-01".parse().unwrap())
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_text_touches_only_the_text_column() {
        let (repo, _tmp) = setup();

        let saved = repo.save(entry("2023-03-15", "oh")).await.unwrap();
        repo.update_text(saved.id, "hello").await.unwrap();

        let found = repo.find_by_date("2023-03-15".parse().unwrap()).unwrap();
        assert_eq!(found[0].text, "hello");
        assert_eq!(found[0].weather, "sunny");
        assert_eq!(found[0].icon, "A01");
        assert_eq!(found[0].temperature, 20.0);
    }

    #[tokio::test]
    async fn delete_all_by_date_is_idempotent() {
        let (repo, _tmp) = setup();

        repo.save(entry("2023-03-15", "Wow")).await.unwrap();
        repo.save(entry("2023-03-15", "oh")).await.unwrap();

        let target: NaiveDate = "2023-03-15".parse().unwrap();
        assert_eq!(repo.delete_all_by_date(target).await.unwrap(), 2);
        assert_eq!(repo.delete_all_by_date(target).await.unwrap(), 0);
        assert!(repo.find_by_date(target).unwrap().is_empty());
    }
}
