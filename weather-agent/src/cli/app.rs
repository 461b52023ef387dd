use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "weather-agent",
    version,
    about = "Weather Agent - ask a local model about the weather",
    long_about = "Weather Agent sends your questions to a local Ollama model. Weather questions are answered with live data from OpenWeatherMap; anything else gets the model's reply."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session (default)
    #[command(about = "Start an interactive session; type 'exit' or 'quit' to leave")]
    Chat,

    /// Serve the weather endpoint over HTTP
    #[command(about = "Serve GET /weather?city=<city> over HTTP")]
    Serve(ServeArgs),

    /// Look up the weather for a city directly
    #[command(about = "Print the current weather for a city without asking the model")]
    Weather(WeatherArgs),
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address, overrides the configured one
    #[arg(short, long, help = "Address to listen on (e.g. 127.0.0.1:8000)")]
    pub bind: Option<String>,
}

#[derive(Parser, Debug)]
pub struct WeatherArgs {
    /// City name, passed to the provider as typed
    #[arg(help = "City to get the weather for")]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["weather-agent"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_serve_with_bind() {
        let cli = Cli::try_parse_from(["weather-agent", "-v", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.bind.as_deref(), Some("127.0.0.1:9000")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_weather_city() {
        let cli = Cli::try_parse_from(["weather-agent", "weather", "New York"]).unwrap();
        match cli.command {
            Some(Commands::Weather(args)) => assert_eq!(args.city, "New York"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
