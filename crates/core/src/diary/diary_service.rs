//! Diary orchestration.
//!
//! The only component with actual decisions: whether a requested date is
//! acceptable, and whether weather comes from the local snapshot cache or
//! a live provider call.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::{debug, info};

use skylog_weather::{CurrentWeatherProvider, WeatherObservation};

use crate::diary::diary_model::{DiaryConfig, DiaryEntry, NewDiaryEntry};
use crate::diary::diary_traits::{DiaryRepositoryTrait, DiaryServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::weather::{WeatherSnapshot, WeatherSnapshotRepositoryTrait};

pub struct DiaryService {
    diary_repository: Arc<dyn DiaryRepositoryTrait>,
    snapshot_repository: Arc<dyn WeatherSnapshotRepositoryTrait>,
    weather_provider: Arc<dyn CurrentWeatherProvider>,
    config: DiaryConfig,
}

impl DiaryService {
    pub fn new(
        diary_repository: Arc<dyn DiaryRepositoryTrait>,
        snapshot_repository: Arc<dyn WeatherSnapshotRepositoryTrait>,
        weather_provider: Arc<dyn CurrentWeatherProvider>,
        config: DiaryConfig,
    ) -> Self {
        Self {
            diary_repository,
            snapshot_repository,
            weather_provider,
            config,
        }
    }

    fn validate_date(&self, date: NaiveDate) -> Result<()> {
        if date < self.config.min_date || date > self.config.max_date {
            return Err(ValidationError::DateOutOfRange(date).into());
        }
        Ok(())
    }

    /// Weather for `date`: the first cached snapshot if one exists,
    /// otherwise a live provider call. The live result is deliberately
    /// not persisted as a snapshot; only the scheduled fetch writes the
    /// cache.
    async fn resolve_weather(&self, date: NaiveDate) -> Result<WeatherObservation> {
        let mut snapshots = self.snapshot_repository.find_by_date(date)?;
        if !snapshots.is_empty() {
            let snapshot = snapshots.remove(0);
            debug!("using cached weather snapshot for {}", date);
            return Ok(WeatherObservation {
                condition: snapshot.condition,
                icon: snapshot.icon,
                temperature: snapshot.temperature,
            });
        }

        debug!("no weather snapshot for {}, fetching current conditions", date);
        Ok(self.weather_provider.fetch_current().await?)
    }
}

#[async_trait]
impl DiaryServiceTrait for DiaryService {
    async fn create_diary(&self, date: NaiveDate, text: &str) -> Result<()> {
        self.validate_date(date)?;
        let weather = self.resolve_weather(date).await?;

        self.diary_repository
            .save(NewDiaryEntry {
                date,
                text: text.to_string(),
                weather: weather.condition,
                icon: weather.icon,
                temperature: weather.temperature,
            })
            .await?;
        Ok(())
    }

    fn read_diary(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        self.validate_date(date)?;
        self.diary_repository.find_by_date(date)
    }

    fn read_diaries(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DiaryEntry>> {
        self.diary_repository.find_by_date_range(start, end)
    }

    async fn update_diary(&self, date: NaiveDate, text: &str) -> Result<()> {
        let entry = self
            .diary_repository
            .find_first_by_date(date)?
            .ok_or_else(|| Error::NotFound(format!("no diary entry for {}", date)))?;
        self.diary_repository.update_text(entry.id, text).await
    }

    async fn delete_diary(&self, date: NaiveDate) -> Result<()> {
        let removed = self.diary_repository.delete_all_by_date(date).await?;
        debug!("deleted {} diary entries for {}", removed, date);
        Ok(())
    }

    async fn save_todays_weather(&self) -> Result<()> {
        let observation = self.weather_provider.fetch_current().await?;
        let today = Local::now().date_naive();
        self.snapshot_repository
            .save(WeatherSnapshot::from_observation(today, observation))
            .await?;
        info!("stored weather snapshot for {}", today);
        Ok(())
    }
}
