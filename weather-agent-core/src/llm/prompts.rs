//! Prompt template for the weather classifier
//!
//! The model is told to answer weather questions with a single textual tool
//! call and to refuse anything else; the interpreter matches that call.

use regex_utils::tool_call;

/// Answer the model is told to give for non-weather questions
pub const REFUSAL: &str = "I can only help with weather-related questions.";

/// Prompt templates used by the agent
pub struct PromptTemplates;

impl PromptTemplates {
    /// Fill the classification template with the raw user input
    pub fn weather_classifier(input: &str) -> String {
        format!(
            "\nYou are a helpful assistant that can access weather information.\n\
             You are a strict weather assistant.\n\
             You are ONLY allowed to respond using the 'get_weather' tool.\n\
             If a user asks anything not related to weather, respond: \n\
             '{refusal}'\n\
             \n\
             If the user asks for the weather, respond ONLY like this:\n\
             {example}\n\
             \n\
             Otherwise, answer normally.\n\
             \n\
             User: {input}\n\
             Assistant:",
            refusal = REFUSAL,
            example = tool_call::render("CityName"),
            input = input,
        )
    }
}
