use serde::Serialize;

pub mod baumann;
pub mod concern;
pub mod mood;
pub mod product;
pub mod routine;
pub mod weather;

pub use baumann::{Axis, BaumannScore, SkinTypeDescription};
pub use concern::{Concern, ConcernPriority, PriorityLevel};
pub use mood::{MoodLogEntry, NewMoodEntry};
pub use product::{NewProduct, Product};
pub use routine::{RecommendedStep, RoutineStep, SkinProfile, SkinType, StepName};
pub use weather::{
    Coordinates, ResolvedWeather, WeatherCondition, WeatherModifierSet, WeatherReading,
    WeatherSource,
};

/// Routine recommendation for directly supplied skin attributes
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub skin_profile: SkinProfile,
    pub weather: ResolvedWeather,
    pub routine: Vec<RecommendedStep>,
}

/// Full Baumann analysis: base type, weather-adjusted type and what to do about it
#[derive(Debug, Serialize)]
pub struct SkinAnalysisResponse {
    pub base_score: BaumannScore,
    pub base_type: SkinTypeDescription,
    pub modifiers: WeatherModifierSet,
    pub adjusted_score: BaumannScore,
    pub adjusted_type: SkinTypeDescription,
    pub weather: ResolvedWeather,
    pub priorities: Vec<ConcernPriority>,
    pub skin_profile: SkinProfile,
    pub routine: Vec<RecommendedStep>,
}
