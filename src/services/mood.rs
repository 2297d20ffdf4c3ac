use std::sync::Arc;

use crate::{
    db::SkinStore,
    error::{AppError, AppResult},
    models::{Coordinates, MoodLogEntry, NewMoodEntry},
    services::weather::WeatherService,
};

/// Default number of entries returned by the history listing
pub const DEFAULT_HISTORY: i64 = 30;

/// Upper bound on the history listing
pub const MAX_HISTORY: i64 = 365;

/// Records a mood entry, snapshotting the weather when a location is known
pub async fn log_mood(
    store: Arc<dyn SkinStore>,
    weather: &WeatherService,
    entry: NewMoodEntry,
    coords: Option<Coordinates>,
    city: Option<&str>,
) -> AppResult<MoodLogEntry> {
    let entry = if coords.is_some() || city.is_some() {
        let resolved = weather.resolve(coords, city).await;
        entry.with_weather(resolved.reading.temperature, resolved.reading.humidity)
    } else {
        entry
    };

    store.insert_mood(entry).await
}

/// Recent mood entries, newest first
pub async fn mood_history(store: Arc<dyn SkinStore>, limit: Option<i64>) -> AppResult<Vec<MoodLogEntry>> {
    let limit = limit.unwrap_or(DEFAULT_HISTORY);
    if limit <= 0 {
        return Err(AppError::InvalidInput(
            "Limit must be a positive number".to_string(),
        ));
    }

    store.recent_moods(limit.min(MAX_HISTORY)).await
}
