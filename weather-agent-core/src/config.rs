//! Process-wide configuration
//!
//! Resolved once at startup from defaults, an optional TOML file and the
//! environment (a `.env` file is loaded first), then shared read-only.

use crate::environment;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_MODEL_HOST: &str = "OLLAMA_HOST";
pub const ENV_MODEL: &str = "OLLAMA_MODEL";
pub const ENV_WEATHER_BASE_URL: &str = "OPENWEATHER_BASE_URL";

/// Configuration shared by the interactive loop and the HTTP endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// OpenWeatherMap API key
    pub openweather_api_key: Option<String>,

    /// Base URL of the weather provider
    pub weather_base_url: String,

    /// Timeout for the weather call
    pub weather_timeout_secs: u64,

    /// Ollama address; resolved from the runtime environment when unset
    pub model_host: Option<String>,

    /// Model identifier sent with every prompt
    pub model: String,

    /// Timeout for the model call
    pub model_timeout_secs: u64,

    /// Listen address of the HTTP endpoint
    pub bind: String,

    /// Verbose logging of the model-client path
    pub debug: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            weather_base_url: "https://api.openweathermap.org".to_string(),
            weather_timeout_secs: 10,
            model_host: None,
            model: "openhermes".to_string(),
            model_timeout_secs: 30,
            bind: "0.0.0.0:8000".to_string(),
            debug: false,
        }
    }
}

impl AgentConfig {
    /// Load configuration: defaults, then `path` if given, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.resolve_model_host(environment::is_running_in_docker());

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Overlay values found through `lookup` (normally the process environment)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.openweather_api_key = Some(key);
        }
        if let Some(flag) = lookup(ENV_DEBUG) {
            self.debug = flag == "1";
        }
        if let Some(host) = lookup(ENV_MODEL_HOST).filter(|v| !v.is_empty()) {
            self.model_host = Some(host);
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.is_empty()) {
            self.model = model;
        }
        if let Some(url) = lookup(ENV_WEATHER_BASE_URL).filter(|v| !v.is_empty()) {
            self.weather_base_url = url;
        }
    }

    /// Fill in the model host from the runtime environment unless set explicitly
    pub fn resolve_model_host(&mut self, in_docker: bool) {
        if self.model_host.is_none() {
            self.model_host = Some(environment::resolve_model_host(in_docker));
        }
    }

    /// Ollama address
    pub fn model_host(&self) -> &str {
        self.model_host.as_deref().unwrap_or(environment::LOCAL_MODEL_HOST)
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_timeout_secs)
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    /// Parsed listen address of the HTTP endpoint
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|_| ConfigError::InvalidValue {
            key: "bind".to_string(),
            value: self.bind.clone(),
        })
    }
}
