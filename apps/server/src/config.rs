use std::{net::SocketAddr, time::Duration};

use chrono::NaiveDate;
use skylog_core::diary::DiaryConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub weather_api_key: String,
    pub weather_city: String,
    pub request_timeout: Duration,
    pub snapshot_interval: Duration,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SKYLOG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid SKYLOG_LISTEN_ADDR");
        let db_path = std::env::var("SKYLOG_DB_PATH").unwrap_or_else(|_| "./db/skylog.db".into());
        let weather_api_key = std::env::var("SKYLOG_OWM_API_KEY").unwrap_or_default();
        let weather_city = std::env::var("SKYLOG_WEATHER_CITY").unwrap_or_else(|_| "seoul".into());
        let timeout_ms: u64 = std::env::var("SKYLOG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let snapshot_interval_secs: u64 = std::env::var("SKYLOG_SNAPSHOT_INTERVAL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        let min_date = std::env::var("SKYLOG_MIN_DATE")
            .ok()
            .and_then(|s| s.parse().ok());
        let max_date = std::env::var("SKYLOG_MAX_DATE")
            .ok()
            .and_then(|s| s.parse().ok());
        Self {
            listen_addr,
            db_path,
            weather_api_key,
            weather_city,
            request_timeout: Duration::from_millis(timeout_ms),
            snapshot_interval: Duration::from_secs(snapshot_interval_secs.max(1)),
            min_date,
            max_date,
        }
    }

    /// Diary date bounds: defaults, with optional env overrides.
    pub fn diary_config(&self) -> DiaryConfig {
        let defaults = DiaryConfig::default();
        DiaryConfig {
            min_date: self.min_date.unwrap_or(defaults.min_date),
            max_date: self.max_date.unwrap_or(defaults.max_date),
        }
    }
}
