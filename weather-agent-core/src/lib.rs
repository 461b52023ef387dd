//! Core functionality for weather-agent
//!
//! This crate contains the weather lookup, the language-model client, the
//! reply interpreter and the HTTP endpoint shared by the `weather-agent` binary.

pub mod agent;
pub mod config;
pub mod environment;
pub mod errors;
pub mod intent;
pub mod llm;
pub mod server;
pub mod weather;

pub use agent::{AgentReply, Turn, WeatherAgent};
pub use config::AgentConfig;
pub use errors::{ConfigError, UpstreamFailure, UpstreamResult};
pub use intent::{IntentInterpreter, ParsedIntent, ToolCallInterpreter};
pub use llm::{LanguageModel, OllamaClient};
pub use weather::{OpenWeatherClient, WeatherLookup, WeatherReport};
