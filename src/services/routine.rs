use crate::models::{
    BaumannScore, ConcernPriority, RoutineStep, SkinProfile, SkinType, StepName, WeatherReading,
};

/// Builds the ordered skincare routine for a profile under current weather
///
/// Steps come out as Cleanse, Tone, [Treat], Moisturize, [Protect]. Treat is
/// only present for acne or aging concerns, Protect only when UV exceeds 2.
pub fn build_routine(profile: &SkinProfile, weather: &WeatherReading) -> Vec<RoutineStep> {
    let mut routine = Vec::with_capacity(5);

    routine.push(cleanse(profile));
    routine.push(tone(profile));

    if let Some(step) = treat(profile) {
        routine.push(step);
    }

    routine.push(moisturize(profile, weather));

    if let Some(step) = protect(weather) {
        routine.push(step);
    }

    routine
}

fn cleanse(profile: &SkinProfile) -> RoutineStep {
    if profile.skin_type.is_oily() {
        RoutineStep::new(
            StepName::Cleanse,
            "Gel or foam cleanser",
            "For oily skin, use a gel cleanser to remove excess oil",
        )
    } else {
        RoutineStep::new(
            StepName::Cleanse,
            "Cream or milk cleanser",
            "For dry/normal skin, use a gentle cream cleanser",
        )
    }
}

fn tone(profile: &SkinProfile) -> RoutineStep {
    if profile.sensitive {
        RoutineStep::new(
            StepName::Tone,
            "Alcohol-free calming toner",
            "Sensitive skin needs gentle, soothing ingredients",
        )
    } else {
        RoutineStep::new(
            StepName::Tone,
            "Hydrating toner",
            "Balance skin pH and prepare for next steps",
        )
    }
}

fn treat(profile: &SkinProfile) -> Option<RoutineStep> {
    if profile.has_concern("acne") {
        Some(RoutineStep::new(
            StepName::Treat,
            "Salicylic acid serum",
            "Target breakouts and unclog pores",
        ))
    } else if profile.has_concern("aging") {
        Some(RoutineStep::new(
            StepName::Treat,
            "Vitamin C serum",
            "Protect from environmental damage and boost collagen",
        ))
    } else {
        None
    }
}

fn moisturize(profile: &SkinProfile, weather: &WeatherReading) -> RoutineStep {
    if weather.humidity < 40.0 {
        RoutineStep::new(
            StepName::Moisturize,
            "Rich cream moisturizer",
            "Low humidity requires extra hydration",
        )
    } else if weather.humidity > 70.0 && profile.skin_type.is_oily() {
        RoutineStep::new(
            StepName::Moisturize,
            "Light gel moisturizer",
            "High humidity means lighter hydration needed",
        )
    } else {
        RoutineStep::new(
            StepName::Moisturize,
            "Medium-weight moisturizer",
            "Balanced hydration for current conditions",
        )
    }
}

fn protect(weather: &WeatherReading) -> Option<RoutineStep> {
    let uv = weather.uv_index;
    if uv <= 2.0 {
        return None;
    }

    let spf = if uv > 5.0 { "50+" } else { "30" };
    Some(RoutineStep::new(
        StepName::Protect,
        format!("Broad-spectrum SPF {}", spf),
        format!("UV index is {} - sun protection needed", uv),
    ))
}

/// Projects a weather-adjusted Baumann score onto the coarse profile the
/// routine rules use: oily and sensitive follow their axis letters, and the
/// ranked concerns become the concern tags.
pub fn profile_from_score(adjusted: &BaumannScore, priorities: &[ConcernPriority]) -> SkinProfile {
    let skin_type = if adjusted.oily() >= 50 {
        SkinType::Oily
    } else {
        SkinType::Dry
    };

    SkinProfile {
        skin_type,
        sensitive: adjusted.sensitive() >= 50,
        concerns: priorities
            .iter()
            .map(|p| p.concern.tag().to_string())
            .collect(),
    }
}
