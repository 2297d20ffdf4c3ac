use crate::models::{BaumannScore, WeatherModifierSet, WeatherReading};

/// Computes how current weather shifts each Baumann axis
///
/// Each factor is matched against fixed bands, most extreme first:
/// - humidity moves oiliness (dry air reads drier, humid air oilier)
/// - temperature moves sensitivity and oiliness (cold sensitizes, heat does both)
/// - UV index moves pigmentation risk
///
/// Humidity and temperature contributions to oiliness add up. Wrinkle is
/// never moved by weather.
pub fn weather_modifier(reading: &WeatherReading) -> WeatherModifierSet {
    let mut modifiers = WeatherModifierSet::default();

    let humidity = reading.humidity;
    modifiers.oily = if humidity < 30.0 {
        -25
    } else if humidity < 40.0 {
        -15
    } else if humidity > 80.0 {
        20
    } else if humidity > 70.0 {
        10
    } else {
        0
    };

    let temperature = reading.temperature;
    let (oily, sensitive) = if temperature < 5.0 {
        (-10, 15)
    } else if temperature < 10.0 {
        (-5, 10)
    } else if temperature > 35.0 {
        (15, 10)
    } else if temperature > 30.0 {
        (10, 5)
    } else {
        (0, 0)
    };
    modifiers.oily += oily;
    modifiers.sensitive += sensitive;

    let uv = reading.uv_index;
    modifiers.pigmented = if uv >= 8.0 {
        25
    } else if uv >= 6.0 {
        15
    } else if uv >= 3.0 {
        5
    } else {
        0
    };

    modifiers
}

/// Effective skin type under the given weather: base score shifted by the
/// weather modifier, every axis clamped back into `[0, 100]`
pub fn apply_weather(base: &BaumannScore, reading: &WeatherReading) -> BaumannScore {
    let modifiers = weather_modifier(reading);
    adjust(base, &modifiers)
}

/// Adds a modifier set to a score
pub fn adjust(base: &BaumannScore, modifiers: &WeatherModifierSet) -> BaumannScore {
    BaumannScore::new(
        base.oily() + modifiers.oily,
        base.sensitive() + modifiers.sensitive,
        base.pigmented() + modifiers.pigmented,
        base.wrinkle() + modifiers.wrinkle,
    )
}
