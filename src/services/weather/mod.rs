use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Coordinates, ResolvedWeather, WeatherReading, WeatherSource},
};

pub mod climate;
pub mod weatherapi;

use climate::{resolve_city, CityProfile, Season};

/// Source of live weather readings
///
/// Implementations may fail for any reason (timeout, transport, bad payload).
/// Callers go through [`WeatherService`], which turns any failure into a
/// climate fallback.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at the given position
    async fn fetch_current(&self, coords: Coordinates) -> AppResult<WeatherReading>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Resolves the weather for a request, live when possible
///
/// Never fails: a missing provider or any provider error yields the city's
/// seasonal climate averages instead.
#[derive(Clone)]
pub struct WeatherService {
    provider: Option<Arc<dyn WeatherProvider>>,
    default_city: String,
}

impl WeatherService {
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>, default_city: String) -> Self {
        Self {
            provider,
            default_city,
        }
    }

    /// Weather service that only ever serves climate averages
    pub fn fallback_only(default_city: String) -> Self {
        Self::new(None, default_city)
    }

    /// City profile for a key, or the default city
    pub fn city(&self, key: Option<&str>) -> &'static CityProfile {
        resolve_city(key, &self.default_city)
    }

    /// Resolves weather at `coords` if given, otherwise at the city's position
    ///
    /// The fallback reading comes from `city` (or the default city) for the
    /// current season.
    pub async fn resolve(&self, coords: Option<Coordinates>, city: Option<&str>) -> ResolvedWeather {
        let profile = self.city(city);
        let position = coords.unwrap_or_else(|| profile.coordinates());

        match &self.provider {
            Some(provider) => match provider.fetch_current(position).await {
                Ok(reading) => return ResolvedWeather::new(reading, WeatherSource::Live),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        provider = provider.name(),
                        coordinates = %position,
                        fallback_city = profile.key,
                        "Live weather unavailable, using climate defaults"
                    );
                }
            },
            None => {
                tracing::debug!(
                    fallback_city = profile.key,
                    "No weather provider configured, using climate defaults"
                );
            }
        }

        let season = Season::for_date(Utc::now().date_naive());
        ResolvedWeather::new(profile.reading(season), WeatherSource::ClimateDefault)
    }
}
