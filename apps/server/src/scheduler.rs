//! Background scheduler for the daily weather snapshot.
//!
//! Keeps the `date_weather` cache warm so diary creation rarely needs a
//! live provider call. Failures are logged and retried on the next tick;
//! they never take the server down.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{info, warn};

use crate::main_lib::AppState;
use skylog_core::diary::DiaryServiceTrait;

/// Initial delay before the first fetch (lets the server finish starting)
const INITIAL_DELAY_SECS: u64 = 30;

pub fn spawn_snapshot_job(state: Arc<AppState>, every: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;
        let mut ticker = interval(every);
        loop {
            ticker.tick().await;
            match state.diary_service.save_todays_weather().await {
                Ok(()) => info!("weather snapshot refreshed"),
                Err(e) => warn!("weather snapshot refresh failed: {}", e),
            }
        }
    });
}
