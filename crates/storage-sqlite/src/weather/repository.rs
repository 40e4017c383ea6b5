use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::model::{DateWeatherDB, NewDateWeatherDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::date_weather::dsl::*;
use skylog_core::errors::Result;
use skylog_core::weather::{WeatherSnapshot, WeatherSnapshotRepositoryTrait};

pub struct DateWeatherRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DateWeatherRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DateWeatherRepository { pool, writer }
    }
}

#[async_trait]
impl WeatherSnapshotRepositoryTrait for DateWeatherRepository {
    fn find_by_date(&self, target_date: NaiveDate) -> Result<Vec<WeatherSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = date_weather
            .filter(date.eq(target_date))
            .order(id.asc())
            .load::<DateWeatherDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(WeatherSnapshot::from).collect())
    }

    async fn save(&self, snapshot: WeatherSnapshot) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let new_db: NewDateWeatherDB = snapshot.into();
                diesel::insert_into(date_weather)
                    .values(&new_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
