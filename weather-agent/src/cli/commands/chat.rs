//! Interactive session handler

use anyhow::{Context, Result};
use regex_utils::sentinel;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use weather_agent_core::{AgentConfig, AgentReply, OllamaClient, OpenWeatherClient, WeatherAgent};

const BANNER: &str = "🌦️ Weather AI Agent is running with Ollama. Type 'exit' to quit.\nTry: What's the weather in Berlin?";

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Handle the chat command on stdin/stdout
pub async fn execute(config: &AgentConfig) -> Result<()> {
    let model = OllamaClient::from_config(config).context("Failed to create Ollama client")?;
    let weather =
        OpenWeatherClient::from_config(config).context("Failed to create weather client")?;
    info!("Using model {} at {}", config.model, model.host());

    let agent = WeatherAgent::new(Arc::new(model), Arc::new(weather));
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    run_session(&agent, stdin, &mut stdout).await
}

/// Read queries from `input` until EOF or a sentinel, answering on `output`
pub async fn run_session<R, W>(agent: &WeatherAgent, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut state = LoopState::Running;

    write_line(output, BANNER).await?;

    while state == LoopState::Running {
        output.write_all(b"You: ").await?;
        output.flush().await?;

        let line = lines.next_line().await.context("Failed to read input")?;
        state = step(agent, line.as_deref(), output).await?;
    }

    debug!("Session terminated");
    Ok(())
}

/// Handle one line; `None` means end of input
async fn step<W>(agent: &WeatherAgent, line: Option<&str>, output: &mut W) -> Result<LoopState>
where
    W: AsyncWrite + Unpin,
{
    let query = match line {
        None => {
            write_line(output, "").await?;
            return Ok(LoopState::Terminated);
        }
        Some(query) if sentinel::is_exit(query) => {
            write_line(output, "👋 Goodbye!").await?;
            return Ok(LoopState::Terminated);
        }
        Some(query) => query,
    };

    write_line(output, "⚙️ Sending prompt to Ollama...").await?;

    match agent.respond(query).await {
        Ok(turn) => {
            write_line(output, "✅ Response received.").await?;
            write_line(output, &format!("\n🔍 Raw Output:\n{}\n", turn.raw)).await?;
            match turn.reply {
                AgentReply::Weather { sentence, .. } => {
                    write_line(output, &format!("🌤️ {}\n", sentence)).await?
                }
                AgentReply::Text(text) => write_line(output, &format!("🧠 {}\n", text)).await?,
            }
        }
        Err(e) => {
            debug!("LLM call failed: {}", e);
            write_line(output, &format!("❌ Error during LLM call: {}", e)).await?;
        }
    }

    Ok(LoopState::Running)
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use weather_agent_core::{
        LanguageModel, UpstreamFailure, UpstreamResult, WeatherLookup, WeatherReport,
    };

    /// Replies with a tool call for prompts mentioning Berlin, fails for "boom"
    struct StubModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LanguageModel for StubModel {
        fn model(&self) -> &str {
            "stub"
        }

        async fn generate(&self, prompt: &str) -> UpstreamResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let user = prompt.rsplit("User: ").next().unwrap_or_default();
            if user.contains("boom") {
                Err(UpstreamFailure::timeout(Duration::from_secs(30)))
            } else if user.contains("Berlin") {
                Ok(r#"CALL get_weather(city="Berlin")"#.to_string())
            } else {
                Ok("I can only help with weather-related questions.".to_string())
            }
        }
    }

    struct StubWeather;

    #[async_trait]
    impl WeatherLookup for StubWeather {
        async fn fetch(&self, city: &str) -> UpstreamResult<WeatherReport> {
            Ok(WeatherReport {
                city: city.to_string(),
                description: "sunny".to_string(),
                temperature_c: 10.0,
            })
        }
    }

    async fn run(input: &str) -> (String, usize) {
        let model = Arc::new(StubModel { calls: AtomicUsize::new(0) });
        let agent = WeatherAgent::new(model.clone(), Arc::new(StubWeather));
        let mut output = Vec::new();

        run_session(&agent, input.as_bytes(), &mut output).await.unwrap();

        (String::from_utf8(output).unwrap(), model.calls.load(Ordering::SeqCst))
    }

    #[tokio::test]
    async fn test_exit_skips_model() {
        for sentinel in ["exit", "EXIT", "Quit", "qUiT"] {
            let (output, calls) = run(&format!("{sentinel}\n")).await;
            assert_eq!(calls, 0);
            assert!(output.contains("👋 Goodbye!"));
        }
    }

    #[tokio::test]
    async fn test_padded_sentinel_is_a_query() {
        let (output, calls) = run("  exit \nquit\n").await;
        assert_eq!(calls, 1);
        assert!(output.contains("🧠 I can only help with weather-related questions."));
        assert!(output.ends_with("👋 Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_weather_query() {
        let (output, calls) = run("What's the weather in Berlin?\nexit\n").await;
        assert_eq!(calls, 1);
        assert!(output.contains(r#"CALL get_weather(city="Berlin")"#));
        assert!(output.contains("🌤️ The weather in Berlin is sunny with 10°C."));
    }

    #[tokio::test]
    async fn test_plain_text_query() {
        let (output, _) = run("Tell me a joke\nquit\n").await;
        assert!(output.contains("🧠 I can only help with weather-related questions."));
        assert!(!output.contains("🌤️"));
    }

    #[tokio::test]
    async fn test_model_failure_keeps_running() {
        let (output, calls) = run("boom\nWeather in Berlin?\nexit\n").await;
        assert_eq!(calls, 2);
        assert_eq!(output.matches("Request timed out after 30s").count(), 1);
        assert!(output.contains("❌ Error during LLM call: Request timed out after 30s"));
        assert!(output.contains("🌤️ The weather in Berlin is sunny with 10°C."));
        assert!(output.ends_with("👋 Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_eof_terminates() {
        let (output, calls) = run("").await;
        assert_eq!(calls, 0);
        assert!(output.starts_with(BANNER));
        assert!(!output.contains("Goodbye"));
    }
}
