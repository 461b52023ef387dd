//! Regex utilities for weather-agent
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled pattern for the textual tool call emitted by the model
pub mod tool_call {
    use super::*;

    /// Literal shape the prompt asks the model to produce for weather questions.
    /// `.` does not cross newlines, so the city never spans lines.
    pub static GET_WEATHER_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"CALL get_weather\(city="(.*?)"\)"#).expect("Invalid regex pattern")
    });

    /// Extract the city argument of the first `CALL get_weather(city="...")` in `text`
    pub fn extract_city(text: &str) -> Option<String> {
        GET_WEATHER_PATTERN
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Render the call shape for a city, as used in the prompt's one-shot example
    pub fn render(city: &str) -> String {
        format!(r#"CALL get_weather(city="{}")"#, city)
    }
}

/// Sentinel commands that end an interactive session
pub mod sentinel {
    use super::*;

    pub static EXIT_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^(?:exit|quit)$").expect("Invalid regex pattern"));

    /// Whether a typed line is exactly `exit` or `quit`, in any letter case
    pub fn is_exit(line: &str) -> bool {
        EXIT_PATTERN.is_match(line)
    }
}
