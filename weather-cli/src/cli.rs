use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::info;
use weather_core::{Config, TerminalSink, Units, WeatherApp, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Unit system for this run: imperial, metric or standard.
    #[arg(long, global = true)]
    pub units: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred unit system.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, passed to the API as typed.
        city: String,
    },

    /// Prompt for city names until cancelled (Esc or Ctrl-C).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let config = load_config(self.units.as_deref())?;
                let mut app = WeatherApp::initialize(
                    provider_from_config(&config)?,
                    TerminalSink::stdio(),
                );

                let outcome = app.activate(&city).await?;
                Ok(if outcome.is_displayed() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Command::Interactive => {
                let config = load_config(self.units.as_deref())?;
                let mut app = WeatherApp::initialize(
                    provider_from_config(&config)?,
                    TerminalSink::stdio(),
                );

                loop {
                    match Text::new("City:").prompt() {
                        Ok(city) => {
                            app.activate(&city).await?;
                        }
                        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                            break;
                        }
                        Err(e) => return Err(e).context("Failed to read city name"),
                    }
                }

                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_config(units: Option<&str>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(units) = units {
        config.units = Units::try_from(units)?;
    }
    Ok(config)
}

fn configure() -> anyhow::Result<()> {
    // File only: a key coming from the environment must not be persisted.
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let current = Units::all()
        .iter()
        .position(|u| *u == config.units)
        .unwrap_or(0);
    let units = Select::new("Unit system:", Units::all().to_vec())
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read unit system")?;

    config.set_api_key(api_key.trim().to_string());
    config.units = units;

    let path = config.save()?;
    info!("Configuration saved to {}", path.display());
    println!("Saved configuration to {}", path.display());

    Ok(())
}
