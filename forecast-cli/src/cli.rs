use anyhow::bail;
use clap::Parser;
use forecast_core::{Config, ForecastError, ForecastProvider, OpenMeteoProvider, fetch_report};
use inquire::Text;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Multi-day weather forecast for any place name")]
pub struct Cli {
    /// Place name to look up. Starts an interactive prompt when omitted.
    pub place: Option<String>,

    /// Forecast horizon in days for this run (overrides the config file).
    #[arg(long)]
    pub days: Option<u8>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(days) = self.days {
            config.forecast_days = Some(days);
        }

        let provider = OpenMeteoProvider::new(&config)?;

        match self.place {
            Some(place) => run_once(&provider, &place).await,
            None => run_interactive(&provider).await,
        }
    }
}

/// One-shot lookup: print the report or fail with a non-zero exit.
async fn run_once(provider: &impl ForecastProvider, place: &str) -> anyhow::Result<()> {
    match lookup(provider, place).await {
        Ok(report) => {
            print!("{}", render::render_report(&report));
            Ok(())
        }
        Err(err) if err.is_user_facing() => bail!("Location not found"),
        Err(err) => {
            tracing::error!(error = %err, "forecast lookup failed");
            bail!("Could not fetch the forecast, please try again later")
        }
    }
}

/// Repeated-search loop, one complete flow per submission. Flows run
/// strictly one at a time, so a later search can never interleave with an
/// earlier one.
async fn run_interactive(provider: &impl ForecastProvider) -> anyhow::Result<()> {
    loop {
        let input = Text::new("Search from location:")
            .with_help_message("press ESC or submit an empty search to quit")
            .prompt_skippable()?;

        let Some(place) = input else { break };
        let place = place.trim();
        if place.is_empty() {
            break;
        }

        match lookup(provider, place).await {
            Ok(report) => println!("{}", render::render_report(&report)),
            Err(err) if err.is_user_facing() => println!("Location not found"),
            Err(err) => {
                tracing::error!(error = %err, "forecast lookup failed");
                println!("Could not fetch the forecast, please try again later");
            }
        }
    }

    Ok(())
}

/// Run one flow with a loading indicator that is cleared on every exit
/// path, success or failure.
async fn lookup(
    provider: &impl ForecastProvider,
    place: &str,
) -> Result<forecast_core::ForecastReport, ForecastError> {
    eprint!("Loading...");
    let result = fetch_report(provider, place).await;
    eprint!("\r          \r");
    result
}
