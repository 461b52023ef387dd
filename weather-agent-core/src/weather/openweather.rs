//! OpenWeatherMap current-weather client

use super::{WeatherLookup, WeatherReport};
use crate::config::AgentConfig;
use crate::errors::{UpstreamFailure, UpstreamResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const WEATHER_PATH: &str = "/data/2.5/weather";

/// Client for `GET /data/2.5/weather`
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl OpenWeatherClient {
    /// Create a new client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> UpstreamResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamFailure::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }

    /// Create a client from the startup configuration
    pub fn from_config(config: &AgentConfig) -> UpstreamResult<Self> {
        Self::new(
            config.weather_base_url.clone(),
            config.openweather_api_key.clone().unwrap_or_default(),
            config.weather_timeout(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, WEATHER_PATH)
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> UpstreamResult<WeatherReport> {
        debug!("Requesting current weather for '{}'", city);

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| UpstreamFailure::from_reqwest(e.without_url(), self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamFailure::from_reqwest(e.without_url(), self.timeout))?;

        if !status.is_success() {
            // The provider explains rejections in a `message` field
            let message = serde_json::from_str::<ProviderError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(UpstreamFailure::status(status.as_u16(), message));
        }

        let payload: CurrentWeather = serde_json::from_str(&body)?;
        let description = payload
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description)
            .ok_or_else(|| UpstreamFailure::missing_field("weather[0].description"))?;
        let temperature_c = payload
            .main
            .and_then(|m| m.temp)
            .ok_or_else(|| UpstreamFailure::missing_field("main.temp"))?;

        Ok(WeatherReport {
            city: city.to_string(),
            description,
            temperature_c,
        })
    }
}

/// Subset of the current-weather payload we read
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    weather: Vec<Condition>,
    main: Option<MainReadings>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}
