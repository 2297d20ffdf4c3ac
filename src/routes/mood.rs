use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Coordinates, MoodLogEntry, NewMoodEntry},
    routes::{recommendations::required, AppState},
    services::mood,
};

#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    pub mood: Option<String>,
    pub notes: Option<String>,
    /// Defaults to today (UTC)
    pub date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    limit: Option<i64>,
}

/// Handler logging a skin mood entry
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateMoodRequest>,
) -> AppResult<(StatusCode, Json<MoodLogEntry>)> {
    let mood_tag = required(&request.mood, "mood")?;
    let date = request.date.unwrap_or_else(|| Utc::now().date_naive());
    let entry = NewMoodEntry::new(date, mood_tag, request.notes.clone())?;
    let coords = Coordinates::from_optional(request.latitude, request.longitude)?;

    tracing::info!(
        request_id = %request_id,
        mood = %entry.mood,
        date = %entry.date,
        "Logging mood entry"
    );

    let stored = mood::log_mood(
        state.store.clone(),
        &state.weather,
        entry,
        coords,
        request.city.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Handler listing recent mood entries
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> AppResult<Json<Vec<MoodLogEntry>>> {
    let entries = mood::mood_history(state.store.clone(), params.limit).await?;
    Ok(Json(entries))
}
