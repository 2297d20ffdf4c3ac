use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{BaumannScore, Coordinates, SkinAnalysisResponse},
    routes::AppState,
    services::{
        quiz::{self, QuizQuestion, BAUMANN_QUIZ},
        recommendations,
    },
};

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    /// Question id (as a JSON object key) to the selected answer's score
    #[serde(default)]
    pub answers: HashMap<String, i32>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BaumannRequest {
    pub oily: i32,
    pub sensitive: i32,
    pub pigmented: i32,
    pub wrinkle: i32,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Handler returning the quiz questions
pub async fn questions() -> Json<&'static [QuizQuestion]> {
    Json(BAUMANN_QUIZ)
}

/// Handler scoring quiz answers into a weather-adjusted analysis
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(submission): Json<QuizSubmission>,
) -> AppResult<Json<SkinAnalysisResponse>> {
    let answers = parse_answers(&submission.answers)?;
    let coords = Coordinates::from_optional(submission.latitude, submission.longitude)?;
    let base = quiz::score_quiz(&answers);

    tracing::info!(
        request_id = %request_id,
        answered = answers.len(),
        city = ?submission.city,
        base_code = %base.code(),
        "Processing quiz submission"
    );

    let response = recommendations::analyze_skin(
        state.store.clone(),
        &state.weather,
        base,
        coords,
        submission.city.as_deref(),
    )
    .await?;

    Ok(Json(response))
}

/// Handler analyzing an explicitly supplied base score
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<BaumannRequest>,
) -> AppResult<Json<SkinAnalysisResponse>> {
    let coords = Coordinates::from_optional(request.latitude, request.longitude)?;
    let base = BaumannScore::new(
        request.oily,
        request.sensitive,
        request.pigmented,
        request.wrinkle,
    );

    tracing::info!(
        request_id = %request_id,
        base_code = %base.code(),
        "Processing Baumann analysis request"
    );

    let response = recommendations::analyze_skin(
        state.store.clone(),
        &state.weather,
        base,
        coords,
        request.city.as_deref(),
    )
    .await?;

    Ok(Json(response))
}

/// JSON object keys are strings; question ids must parse as integers
fn parse_answers(raw: &HashMap<String, i32>) -> AppResult<HashMap<u32, i32>> {
    raw.iter()
        .map(|(id, score)| {
            id.trim()
                .parse::<u32>()
                .map(|id| (id, *score))
                .map_err(|_| AppError::InvalidInput(format!("Invalid question id: {}", id)))
        })
        .collect()
}
