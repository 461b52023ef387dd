//! Interpretation of model replies
//!
//! Purely syntactic: a reply containing `CALL get_weather(city="...")` is a
//! weather request, anything else is surfaced verbatim.

use regex_utils::tool_call;

/// What the model asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedIntent {
    WeatherRequest { city: String },
    PlainText { text: String },
}

/// Turns a model reply into an intent
pub trait IntentInterpreter: Send + Sync {
    fn interpret(&self, reply: &str) -> ParsedIntent;
}

/// Matches the textual `CALL get_weather(city="...")` tool call
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolCallInterpreter;

impl ToolCallInterpreter {
    pub fn new() -> Self {
        Self
    }
}

impl IntentInterpreter for ToolCallInterpreter {
    fn interpret(&self, reply: &str) -> ParsedIntent {
        match tool_call::extract_city(reply) {
            Some(city) => ParsedIntent::WeatherRequest { city },
            None => ParsedIntent::PlainText { text: reply.to_string() },
        }
    }
}
