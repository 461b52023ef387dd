//! HTTP endpoint command handler

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use weather_agent_core::server::WeatherServer;
use weather_agent_core::{AgentConfig, OpenWeatherClient};

use crate::cli::app::ServeArgs;

/// Handle the serve command
pub async fn execute(args: ServeArgs, config: &AgentConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    let addr = config.bind_addr()?;

    let weather =
        OpenWeatherClient::from_config(&config).context("Failed to create weather client")?;
    info!("Starting weather API on {}", addr);

    WeatherServer::new(addr, Arc::new(weather))
        .run()
        .await
        .with_context(|| format!("Weather API on {} stopped", addr))
}
