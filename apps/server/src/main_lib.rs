use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use skylog_core::diary::{DiaryService, DiaryServiceTrait};
use skylog_storage_sqlite::db;
use skylog_storage_sqlite::diary::DiaryRepository;
use skylog_storage_sqlite::weather::DateWeatherRepository;
use skylog_weather::OpenWeatherMapProvider;

pub struct AppState {
    pub diary_service: Arc<dyn DiaryServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let diary_repository = Arc::new(DiaryRepository::new(pool.clone(), writer.clone()));
    let snapshot_repository = Arc::new(DateWeatherRepository::new(pool.clone(), writer.clone()));
    let weather_provider = Arc::new(OpenWeatherMapProvider::new(
        config.weather_api_key.clone(),
        config.weather_city.clone(),
    ));

    let diary_service = Arc::new(DiaryService::new(
        diary_repository,
        snapshot_repository,
        weather_provider,
        config.diary_config(),
    ));

    Ok(Arc::new(AppState {
        diary_service,
    }))
}
