//! One conversational turn: prompt the model, interpret its reply and, for
//! weather requests, look the weather up.

use crate::errors::UpstreamResult;
use crate::intent::{IntentInterpreter, ParsedIntent, ToolCallInterpreter};
use crate::llm::{LanguageModel, PromptTemplates};
use crate::weather::WeatherLookup;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// Weather sentence (success or error sentence)
    Weather { city: String, sentence: String },
    /// Model text passed through unchanged
    Text(String),
}

/// Result of a turn together with the raw model output
#[derive(Debug, Clone)]
pub struct Turn {
    pub raw: String,
    pub reply: AgentReply,
}

/// Weather agent wiring model, interpreter and weather lookup
pub struct WeatherAgent {
    model: Arc<dyn LanguageModel>,
    weather: Arc<dyn WeatherLookup>,
    interpreter: Box<dyn IntentInterpreter>,
}

impl WeatherAgent {
    /// Create an agent using the tool-call interpreter
    pub fn new(model: Arc<dyn LanguageModel>, weather: Arc<dyn WeatherLookup>) -> Self {
        Self::with_interpreter(model, weather, Box::new(ToolCallInterpreter::new()))
    }

    pub fn with_interpreter(
        model: Arc<dyn LanguageModel>,
        weather: Arc<dyn WeatherLookup>,
        interpreter: Box<dyn IntentInterpreter>,
    ) -> Self {
        Self { model, weather, interpreter }
    }

    /// Send the filled template to the model and return its raw text
    pub async fn classify(&self, input: &str) -> UpstreamResult<String> {
        let prompt = PromptTemplates::weather_classifier(input);
        debug!("Sending prompt to {}", self.model.model());
        self.model.generate(&prompt).await
    }

    /// Run a full turn; only the model call can fail
    pub async fn respond(&self, input: &str) -> UpstreamResult<Turn> {
        let raw = self.classify(input).await?;

        let reply = match self.interpreter.interpret(&raw) {
            ParsedIntent::WeatherRequest { city } => {
                debug!("Model requested weather for '{}'", city);
                let sentence = self.weather.get_weather(&city).await;
                AgentReply::Weather { city, sentence }
            }
            ParsedIntent::PlainText { text } => AgentReply::Text(text),
        };

        Ok(Turn { raw, reply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UpstreamFailure;
    use crate::weather::WeatherReport;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct ScriptedModel {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self { reply: Some(reply.to_string()), prompts: Mutex::new(Vec::new()) })
        }

        fn timing_out() -> Arc<Self> {
            Arc::new(Self { reply: None, prompts: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> UpstreamResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or_else(|| UpstreamFailure::timeout(Duration::from_secs(30)))
        }
    }

    struct RecordingWeather {
        cities: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WeatherLookup for RecordingWeather {
        async fn fetch(&self, city: &str) -> UpstreamResult<WeatherReport> {
            self.cities.lock().unwrap().push(city.to_string());
            Ok(WeatherReport {
                city: city.to_string(),
                description: "clear sky".to_string(),
                temperature_c: 21.0,
            })
        }
    }

    fn weather() -> Arc<RecordingWeather> {
        Arc::new(RecordingWeather { cities: Mutex::new(Vec::new()) })
    }

    #[tokio::test]
    async fn test_weather_turn() {
        let model = ScriptedModel::replying(r#"CALL get_weather(city="Berlin")"#);
        let lookup = weather();
        let agent = WeatherAgent::new(model.clone(), lookup.clone());

        let turn = agent.respond("What's the weather in Berlin?").await.unwrap();

        assert_eq!(turn.raw, r#"CALL get_weather(city="Berlin")"#);
        assert_eq!(
            turn.reply,
            AgentReply::Weather {
                city: "Berlin".to_string(),
                sentence: "The weather in Berlin is clear sky with 21°C.".to_string(),
            }
        );
        assert_eq!(*lookup.cities.lock().unwrap(), vec!["Berlin".to_string()]);

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("User: What's the weather in Berlin?\nAssistant:"));
    }

    #[tokio::test]
    async fn test_text_turn_skips_weather() {
        let model = ScriptedModel::replying("I can only help with weather-related questions.");
        let lookup = weather();
        let agent = WeatherAgent::new(model, lookup.clone());

        let turn = agent.respond("Tell me a joke").await.unwrap();

        assert_eq!(
            turn.reply,
            AgentReply::Text("I can only help with weather-related questions.".to_string())
        );
        assert!(lookup.cities.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let lookup = weather();
        let agent = WeatherAgent::new(ScriptedModel::timing_out(), lookup.clone());

        let err = agent.respond("weather in Oslo?").await.unwrap_err();

        assert!(matches!(err, UpstreamFailure::Timeout { .. }));
        assert!(lookup.cities.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_interpreter() {
        struct AlwaysWeather;
        impl IntentInterpreter for AlwaysWeather {
            fn interpret(&self, _reply: &str) -> ParsedIntent {
                ParsedIntent::WeatherRequest { city: "Lisbon".to_string() }
            }
        }

        let lookup = weather();
        let agent = WeatherAgent::with_interpreter(
            ScriptedModel::replying("whatever"),
            lookup.clone(),
            Box::new(AlwaysWeather),
        );

        let turn = agent.respond("anything").await.unwrap();
        assert!(matches!(turn.reply, AgentReply::Weather { ref city, .. } if city == "Lisbon"));
    }
}
