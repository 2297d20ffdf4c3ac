use std::sync::Arc;

use crate::{
    db::SkinStore,
    error::AppResult,
    models::{
        BaumannScore, Coordinates, RecommendationResponse, SkinAnalysisResponse, SkinProfile,
    },
    services::{
        catalog, classifier, priorities,
        routine::{build_routine, profile_from_score},
        weather::WeatherService,
    },
};

/// Routine and products for directly supplied skin attributes
///
/// Weather is resolved live at `coords` when possible, else from the city's
/// climate averages.
pub async fn recommend_routine(
    store: Arc<dyn SkinStore>,
    weather: &WeatherService,
    profile: SkinProfile,
    coords: Option<Coordinates>,
    city: Option<&str>,
) -> AppResult<RecommendationResponse> {
    let resolved = weather.resolve(coords, city).await;
    let routine = build_routine(&profile, &resolved.reading);

    tracing::info!(
        skin_type = profile.skin_type.as_str(),
        sensitive = profile.sensitive,
        concerns = ?profile.concerns,
        weather_source = ?resolved.source,
        steps = routine.len(),
        "Routine generated"
    );

    let routine = catalog::enrich_routine(
        store,
        routine,
        profile.skin_type,
        &profile.concerns,
        &resolved.conditions,
    )
    .await?;

    Ok(RecommendationResponse {
        skin_profile: profile,
        weather: resolved,
        routine,
    })
}

/// Full Baumann analysis for a base score under current weather
///
/// The base score is shifted by the weather modifier, the adjusted score is
/// ranked into concerns, and the routine is built from the adjusted type.
pub async fn analyze_skin(
    store: Arc<dyn SkinStore>,
    weather: &WeatherService,
    base: BaumannScore,
    coords: Option<Coordinates>,
    city: Option<&str>,
) -> AppResult<SkinAnalysisResponse> {
    let resolved = weather.resolve(coords, city).await;

    let adjusted = classifier::apply_weather(&base, &resolved.reading);
    let modifiers = classifier::weather_modifier(&resolved.reading);
    let priorities = priorities::rank_concerns(&adjusted, &resolved.reading);
    let profile = profile_from_score(&adjusted, &priorities);
    let routine = build_routine(&profile, &resolved.reading);

    tracing::info!(
        base_code = %base.code(),
        adjusted_code = %adjusted.code(),
        priorities = priorities.len(),
        weather_source = ?resolved.source,
        "Skin analysis completed"
    );

    let routine = catalog::enrich_routine(
        store,
        routine,
        profile.skin_type,
        &profile.concerns,
        &resolved.conditions,
    )
    .await?;

    Ok(SkinAnalysisResponse {
        base_type: base.describe(),
        base_score: base,
        modifiers,
        adjusted_type: adjusted.describe(),
        adjusted_score: adjusted,
        weather: resolved,
        priorities,
        skin_profile: profile,
        routine,
    })
}
