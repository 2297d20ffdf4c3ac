use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validates latitude/longitude ranges
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidInput(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidInput(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds coordinates from an optional pair; both or neither must be given
    pub fn from_optional(latitude: Option<f64>, longitude: Option<f64>) -> AppResult<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::InvalidInput(
                "Latitude and longitude must be provided together".to_string(),
            )),
        }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Weather conditions the engine reasons about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Relative humidity, percent
    pub humidity: f64,
    /// Degrees Celsius
    pub temperature: f64,
    pub uv_index: f64,
    #[serde(default)]
    pub place: Option<String>,
    /// Provider's condition text, e.g. "Partly cloudy"
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl WeatherReading {
    pub fn new(humidity: f64, temperature: f64, uv_index: f64) -> Self {
        Self {
            humidity,
            temperature,
            uv_index,
            place: None,
            description: None,
            region: None,
            country: None,
        }
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }
}

/// Per-axis score deltas derived from a weather reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeatherModifierSet {
    pub oily: i32,
    pub sensitive: i32,
    pub pigmented: i32,
    pub wrinkle: i32,
}

/// Coarse weather tags used to match catalog products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Hot,
    Cold,
    Humid,
    Dry,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "hot",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Humid => "humid",
            WeatherCondition::Dry => "dry",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "hot" => Some(WeatherCondition::Hot),
            "cold" => Some(WeatherCondition::Cold),
            "humid" => Some(WeatherCondition::Humid),
            "dry" => Some(WeatherCondition::Dry),
            _ => None,
        }
    }

    /// Tags for a reading: temperature first, then humidity
    pub fn from_reading(reading: &WeatherReading) -> Vec<Self> {
        let mut conditions = Vec::new();

        if reading.temperature > 25.0 {
            conditions.push(WeatherCondition::Hot);
        } else if reading.temperature < 15.0 {
            conditions.push(WeatherCondition::Cold);
        }

        if reading.humidity > 70.0 {
            conditions.push(WeatherCondition::Humid);
        } else if reading.humidity < 40.0 {
            conditions.push(WeatherCondition::Dry);
        }

        conditions
    }
}

impl Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    Live,
    ClimateDefault,
}

/// A reading plus its provenance, as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedWeather {
    #[serde(flatten)]
    pub reading: WeatherReading,
    pub source: WeatherSource,
    pub conditions: Vec<WeatherCondition>,
}

impl ResolvedWeather {
    pub fn new(reading: WeatherReading, source: WeatherSource) -> Self {
        let conditions = WeatherCondition::from_reading(&reading);
        Self {
            reading,
            source,
            conditions,
        }
    }
}

// ============================================================================
// WeatherAPI.com Types
// ============================================================================

/// Response from GET /current.json
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrentResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub humidity: f64,
    pub uv: f64,
    #[serde(default)]
    pub condition: Option<ApiConditionText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConditionText {
    pub text: String,
}

impl From<ApiCurrentResponse> for WeatherReading {
    fn from(response: ApiCurrentResponse) -> Self {
        WeatherReading {
            humidity: response.current.humidity,
            temperature: response.current.temp_c.round(),
            uv_index: response.current.uv,
            place: Some(response.location.name),
            description: response.current.condition.map(|c| c.text),
            region: response.location.region,
            country: response.location.country,
        }
    }
}
