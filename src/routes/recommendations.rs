use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Coordinates, RecommendationResponse, SkinProfile},
    routes::AppState,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub skin_type: Option<String>,
    pub sensitivity: Option<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
}

/// Rejects absent or blank required text fields
pub(crate) fn required<'a>(value: &'a Option<String>, field: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("Missing required field: {}", field)))
}

/// Handler for routine recommendations from direct skin attributes
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let skin_type = required(&request.skin_type, "skin_type")?;
    let sensitivity = required(&request.sensitivity, "sensitivity")?;
    let coords = Coordinates::from_optional(request.latitude, request.longitude)?;
    let profile = SkinProfile::from_tags(skin_type, sensitivity, request.concerns.clone());

    tracing::info!(
        request_id = %request_id,
        skin_type = %skin_type,
        concerns = request.concerns.len(),
        has_coordinates = coords.is_some(),
        "Processing recommendation request"
    );

    let response = recommendations::recommend_routine(
        state.store.clone(),
        &state.weather,
        profile,
        coords,
        request.city.as_deref(),
    )
    .await?;

    Ok(Json(response))
}
