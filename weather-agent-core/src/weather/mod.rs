//! Current-weather lookup
//!
//! The typed path (`fetch`) returns a `WeatherReport` or an `UpstreamFailure`;
//! `get_weather` turns either into the sentence shown to users and never fails.

pub mod openweather;

pub use openweather::OpenWeatherClient;

use crate::errors::{UpstreamFailure, UpstreamResult};
use async_trait::async_trait;
use tracing::warn;

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub description: String,
    pub temperature_c: f64,
}

impl WeatherReport {
    /// Sentence shown to users
    pub fn sentence(&self) -> String {
        format!(
            "The weather in {} is {} with {}°C.",
            self.city,
            self.description,
            self.rounded_temperature()
        )
    }

    /// Whole degrees, halves away from zero; `-0` is shown as `0`
    pub fn rounded_temperature(&self) -> f64 {
        let t = self.temperature_c.round();
        if t == 0.0 { 0.0 } else { t }
    }
}

/// Sentence shown when a lookup fails
pub fn failure_sentence(city: &str, error: &UpstreamFailure) -> String {
    format!("Could not retrieve weather data for {}. Error: {}", city, error)
}

/// Anything that can answer "what is the weather in X"
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Fetch current conditions for `city`
    async fn fetch(&self, city: &str) -> UpstreamResult<WeatherReport>;

    /// Fetch and format; failures become an error sentence naming the city
    async fn get_weather(&self, city: &str) -> String {
        match self.fetch(city).await {
            Ok(report) => report.sentence(),
            Err(e) => {
                warn!("Weather lookup for '{}' failed: {}", city, e);
                failure_sentence(city, &e)
            }
        }
    }
}
