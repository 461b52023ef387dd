use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_agent_core::AgentConfig;
use weather_agent_core::config::ENV_API_KEY;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Loads .env too, so DEBUG can come from there
    let config = AgentConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize tracing with appropriate verbosity; stdout belongs to the session
    let filter = log_filter(cli.verbose, config.debug);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if config.openweather_api_key.is_none() {
        warn!("{} is not set; weather lookups will be rejected by the provider", ENV_API_KEY);
    }

    let runtime = tokio::runtime::Runtime::new()?;

    // Process commands
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            info!("Starting interactive session");
            runtime.block_on(cli::commands::chat::execute(&config))?;
        }
        Commands::Serve(args) => {
            info!("Serve command: {:?}", args);
            runtime.block_on(cli::commands::serve::execute(args, &config))?;
        }
        Commands::Weather(args) => {
            info!("Weather command: {:?}", args);
            runtime.block_on(cli::commands::weather::execute(args, &config))?;
        }
    }

    Ok(())
}

/// Default log level: quiet unless `-v` or `DEBUG=1`
fn log_filter(verbose: u8, debug: bool) -> &'static str {
    match verbose {
        0 if debug => "debug",
        0 => "warn",
        1 => "debug",
        2.. => "trace",
    }
}
