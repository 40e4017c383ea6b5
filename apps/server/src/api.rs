//! HTTP surface of the diary.
//!
//! Dates arrive as `yyyy-MM-dd` query parameters; create and update take
//! the diary text as the raw request body. Malformed dates are rejected
//! by the query extractor before a handler runs.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, error::ApiResult, main_lib::AppState};
use skylog_core::diary::{DiaryEntry, DiaryServiceTrait};

pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct DateQuery {
    date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateRangeQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

async fn create_diary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
    body: String,
) -> ApiResult<()> {
    state.diary_service.create_diary(query.date, &body).await?;
    Ok(())
}

async fn read_diary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<Vec<DiaryEntry>>> {
    let diaries = state.diary_service.read_diary(query.date)?;
    Ok(Json(diaries))
}

async fn read_diaries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<DiaryEntry>>> {
    let diaries = state
        .diary_service
        .read_diaries(query.start_date, query.end_date)?;
    Ok(Json(diaries))
}

async fn update_diary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
    body: String,
) -> ApiResult<()> {
    state.diary_service.update_diary(query.date, &body).await?;
    Ok(())
}

async fn delete_diary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<()> {
    state.diary_service.delete_diary(query.date).await?;
    Ok(())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/create/diary", post(create_diary))
        .route("/read/diary", get(read_diary))
        .route("/read/diaries", get(read_diaries))
        .route("/update/diary", put(update_diary))
        .route("/delete/diary", delete(delete_diary))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .with_state(state)
}
