use crate::models::{BaumannScore, Concern, ConcernPriority, PriorityLevel, WeatherReading};

/// Ranks skincare concerns for an adjusted (weather-aware) score
///
/// Entries come out in rule order: oil balance, sensitivity, pigmentation,
/// aging, then weather-only dehydration. The list is not re-sorted by level.
pub fn rank_concerns(adjusted: &BaumannScore, weather: &WeatherReading) -> Vec<ConcernPriority> {
    let mut priorities = Vec::new();

    if adjusted.oily() >= 70 {
        priorities.push(ConcernPriority::new(Concern::ExcessOil, PriorityLevel::High));
    } else if adjusted.oily() <= 30 {
        priorities.push(ConcernPriority::new(Concern::Dryness, PriorityLevel::High));
    }

    if adjusted.sensitive() >= 70 {
        priorities.push(ConcernPriority::new(
            Concern::Sensitivity,
            PriorityLevel::High,
        ));
    }

    if adjusted.pigmented() >= 60 || weather.uv_index >= 5.0 {
        let level = if weather.uv_index >= 6.0 {
            PriorityLevel::High
        } else {
            PriorityLevel::Medium
        };
        priorities.push(ConcernPriority::new(Concern::Pigmentation, level));
    }

    if adjusted.wrinkle() >= 60 {
        priorities.push(ConcernPriority::new(Concern::Aging, PriorityLevel::Medium));
    }

    if weather.humidity < 40.0 {
        priorities.push(ConcernPriority::new(
            Concern::Dehydration,
            PriorityLevel::High,
        ));
    }

    priorities
}
