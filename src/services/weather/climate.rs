use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Coordinates, WeatherReading};

/// Key of the city used when a requested city is unknown
pub const DEFAULT_CITY: &str = "istanbul";

/// Climate averages for a city, used when live weather is unavailable
#[derive(Debug, Clone, Serialize)]
pub struct CityProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub climate: &'static str,
    pub avg_humidity: f64,
    pub avg_temp_summer: f64,
    pub avg_temp_winter: f64,
    /// Typical midday UV for the warm half of the year
    pub uv_summer: f64,
    /// Typical midday UV for the cold half of the year
    pub uv_winter: f64,
    pub notes: &'static str,
}

/// Half of the year a fallback profile is read for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// April through September count as summer
    pub fn from_month(month: u32) -> Self {
        if (4..=9).contains(&month) {
            Season::Summer
        } else {
            Season::Winter
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }
}

impl CityProfile {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Synthesizes a reading from the seasonal averages
    pub fn reading(&self, season: Season) -> WeatherReading {
        let (temperature, uv_index) = match season {
            Season::Summer => (self.avg_temp_summer, self.uv_summer),
            Season::Winter => (self.avg_temp_winter, self.uv_winter),
        };

        WeatherReading::new(self.avg_humidity, temperature, uv_index).with_place(self.name)
    }
}

const ISTANBUL: CityProfile = CityProfile {
    key: "istanbul",
    name: "İstanbul",
    latitude: 41.0082,
    longitude: 28.9784,
    climate: "humid_maritime",
    avg_humidity: 73.0,
    avg_temp_summer: 27.0,
    avg_temp_winter: 6.0,
    uv_summer: 7.0,
    uv_winter: 2.0,
    notes: "Humid year-round, mild temps",
};

/// Climate table for supported cities
pub const CITY_PROFILES: &[CityProfile] = &[
    CityProfile {
        key: "ankara",
        name: "Ankara",
        latitude: 39.9334,
        longitude: 32.8597,
        climate: "continental_dry",
        avg_humidity: 55.0,
        avg_temp_summer: 30.0,
        avg_temp_winter: 2.0,
        uv_summer: 8.0,
        uv_winter: 2.0,
        notes: "Very dry winters, hot summers",
    },
    ISTANBUL,
    CityProfile {
        key: "izmir",
        name: "İzmir",
        latitude: 38.4237,
        longitude: 27.1428,
        climate: "mediterranean",
        avg_humidity: 62.0,
        avg_temp_summer: 33.0,
        avg_temp_winter: 9.0,
        uv_summer: 8.0,
        uv_winter: 3.0,
        notes: "Hot dry summers, mild wet winters",
    },
    CityProfile {
        key: "antalya",
        name: "Antalya",
        latitude: 36.8969,
        longitude: 30.7133,
        climate: "mediterranean_coastal",
        avg_humidity: 64.0,
        avg_temp_summer: 34.0,
        avg_temp_winter: 10.0,
        uv_summer: 9.0,
        uv_winter: 3.0,
        notes: "Hot humid coastal climate",
    },
    CityProfile {
        key: "bursa",
        name: "Bursa",
        latitude: 40.1885,
        longitude: 29.0610,
        climate: "transitional",
        avg_humidity: 68.0,
        avg_temp_summer: 29.0,
        avg_temp_winter: 5.0,
        uv_summer: 7.0,
        uv_winter: 2.0,
        notes: "Between maritime and continental",
    },
    CityProfile {
        key: "adana",
        name: "Adana",
        latitude: 37.0000,
        longitude: 35.3213,
        climate: "mediterranean_hot",
        avg_humidity: 66.0,
        avg_temp_summer: 35.0,
        avg_temp_winter: 10.0,
        uv_summer: 9.0,
        uv_winter: 3.0,
        notes: "Very hot summers, humid",
    },
    CityProfile {
        key: "gaziantep",
        name: "Gaziantep",
        latitude: 37.0662,
        longitude: 37.3833,
        climate: "continental",
        avg_humidity: 52.0,
        avg_temp_summer: 32.0,
        avg_temp_winter: 3.0,
        uv_summer: 9.0,
        uv_winter: 3.0,
        notes: "Dry continental, cold winters",
    },
    CityProfile {
        key: "konya",
        name: "Konya",
        latitude: 37.8746,
        longitude: 32.4932,
        climate: "continental_dry",
        avg_humidity: 50.0,
        avg_temp_summer: 30.0,
        avg_temp_winter: 0.0,
        uv_summer: 9.0,
        uv_winter: 2.0,
        notes: "Very dry, extreme temps",
    },
    CityProfile {
        key: "diyarbakir",
        name: "Diyarbakır",
        latitude: 37.9144,
        longitude: 40.2306,
        climate: "continental_hot",
        avg_humidity: 45.0,
        avg_temp_summer: 38.0,
        avg_temp_winter: 2.0,
        uv_summer: 9.0,
        uv_winter: 3.0,
        notes: "Very hot dry summers",
    },
    CityProfile {
        key: "trabzon",
        name: "Trabzon",
        latitude: 41.0027,
        longitude: 39.7168,
        climate: "humid_subtropical",
        avg_humidity: 78.0,
        avg_temp_summer: 26.0,
        avg_temp_winter: 8.0,
        uv_summer: 7.0,
        uv_winter: 2.0,
        notes: "Very humid Black Sea coast",
    },
    CityProfile {
        key: "samsun",
        name: "Samsun",
        latitude: 41.2867,
        longitude: 36.33,
        climate: "humid_subtropical",
        avg_humidity: 75.0,
        avg_temp_summer: 26.0,
        avg_temp_winter: 7.0,
        uv_summer: 7.0,
        uv_winter: 2.0,
        notes: "Humid Black Sea climate",
    },
    CityProfile {
        key: "mersin",
        name: "Mersin",
        latitude: 36.8121,
        longitude: 34.6415,
        climate: "mediterranean_coastal",
        avg_humidity: 68.0,
        avg_temp_summer: 33.0,
        avg_temp_winter: 11.0,
        uv_summer: 9.0,
        uv_winter: 3.0,
        notes: "Hot Mediterranean coast",
    },
];

/// Finds a city by key, case-insensitively
pub fn find_city(key: &str) -> Option<&'static CityProfile> {
    let key = key.trim().to_lowercase();
    CITY_PROFILES.iter().find(|c| c.key == key)
}

/// Resolves a city key, falling back to `default_key` and then to İstanbul
pub fn resolve_city(key: Option<&str>, default_key: &str) -> &'static CityProfile {
    key.and_then(find_city)
        .or_else(|| find_city(default_key))
        .unwrap_or(&CITY_PROFILES[1])
}
