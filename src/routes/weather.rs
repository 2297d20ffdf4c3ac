use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Coordinates, ResolvedWeather},
    routes::AppState,
    services::weather::climate::{CityProfile, CITY_PROFILES},
};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
}

/// Handler listing supported cities and their climate averages
pub async fn cities() -> Json<&'static [CityProfile]> {
    Json(CITY_PROFILES)
}

/// Handler resolving the weather the engine would use for a location
pub async fn current(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> AppResult<Json<ResolvedWeather>> {
    let coords = Coordinates::from_optional(params.lat, params.lon)?;
    let resolved = state.weather.resolve(coords, params.city.as_deref()).await;
    Ok(Json(resolved))
}
