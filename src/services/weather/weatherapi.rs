//! WeatherAPI.com provider
//!
//! Reads current conditions from `/current.json`. Responses are cached per
//! rounded coordinate so repeated requests from the same area within the TTL
//! do not spend API calls.

use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{weather::ApiCurrentResponse, Coordinates, WeatherReading},
    services::weather::WeatherProvider,
};

#[derive(Clone)]
pub struct WeatherApiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Option<Cache>,
    cache_ttl: u64,
}

impl WeatherApiProvider {
    /// Builds a provider whose requests time out after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
        cache: Option<Cache>,
        cache_ttl: u64,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl,
        })
    }

    async fn request_current(&self, coords: Coordinates) -> AppResult<WeatherReading> {
        let url = format!("{}/current.json", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", coords.to_string().as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Weather API returned status {}: {}",
                status, body
            )));
        }

        let payload: ApiCurrentResponse = response.json().await?;
        let reading = WeatherReading::from(payload);

        tracing::info!(
            coordinates = %coords,
            place = ?reading.place,
            humidity = reading.humidity,
            temperature = reading.temperature,
            uv_index = reading.uv_index,
            provider = "weatherapi",
            "Current weather fetched"
        );

        Ok(reading)
    }
}

#[async_trait::async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_current(&self, coords: Coordinates) -> AppResult<WeatherReading> {
        match &self.cache {
            Some(cache) => {
                cached!(cache, CacheKey::weather(&coords), self.cache_ttl, async move {
                    self.request_current(coords).await
                })
            }
            None => self.request_current(coords).await,
        }
    }

    fn name(&self) -> &'static str {
        "weatherapi"
    }
}
