use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Longest accepted mood tag
pub const MAX_MOOD_LEN: usize = 20;

/// Persisted skin mood log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MoodLogEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub mood: String,
    pub notes: Option<String>,
    pub weather_temp: Option<f64>,
    pub weather_humidity: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Validated mood entry ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewMoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub notes: Option<String>,
    pub weather_temp: Option<f64>,
    pub weather_humidity: Option<i32>,
}

impl NewMoodEntry {
    /// Validates the mood tag and trims empty notes away
    pub fn new(date: NaiveDate, mood: &str, notes: Option<String>) -> AppResult<Self> {
        let mood = mood.trim().to_lowercase();
        if mood.is_empty() {
            return Err(AppError::InvalidInput("Mood cannot be empty".to_string()));
        }
        if mood.chars().count() > MAX_MOOD_LEN {
            return Err(AppError::InvalidInput(format!(
                "Mood must be at most {} characters",
                MAX_MOOD_LEN
            )));
        }

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            date,
            mood,
            notes,
            weather_temp: None,
            weather_humidity: None,
        })
    }

    /// Attaches a weather snapshot; humidity is stored as a whole percent
    pub fn with_weather(mut self, temperature: f64, humidity: f64) -> Self {
        self.weather_temp = Some(temperature);
        self.weather_humidity = Some(humidity.round() as i32);
        self
    }
}
