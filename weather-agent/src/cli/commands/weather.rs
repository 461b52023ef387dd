//! One-shot weather lookup, bypassing the model

use anyhow::{Context, Result};
use weather_agent_core::{AgentConfig, OpenWeatherClient, WeatherLookup};

use crate::cli::app::WeatherArgs;

/// Handle the weather command
pub async fn execute(args: WeatherArgs, config: &AgentConfig) -> Result<()> {
    let client =
        OpenWeatherClient::from_config(config).context("Failed to create weather client")?;
    println!("{}", client.get_weather(&args.city).await);
    Ok(())
}
