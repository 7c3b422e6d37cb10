use std::convert::TryFrom;

use clap::{Parser, Subcommand};
use convert_core::{Config, TempUnit, currency, provider_from_config, temperature};
use inquire::Text;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "convert", version, about = "Temperature and currency conversion CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the exchange-rate API endpoint (API key embedded in the URL).
    Configure,

    /// Convert a temperature value, e.g. `temp 21.5 celsius fahrenheit`.
    #[command(allow_negative_numbers = true)]
    Temp {
        /// Temperature value between -273.15 and 1000.
        value: f64,

        /// Source unit: celsius, fahrenheit or kelvin (or c/f/k).
        from: String,

        /// Target unit: celsius, fahrenheit or kelvin (or c/f/k).
        to: String,
    },

    /// Convert an EUR amount at the current exchange rate, e.g. `currency 100 USD`.
    Currency {
        /// Amount in EUR, positive and at most one trillion.
        amount: f64,

        /// Target currency code, e.g. USD.
        code: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => crate::menu::main_menu().await,
            Some(Command::Configure) => configure(),
            Some(Command::Temp { value, from, to }) => temp_once(value, &from, &to),
            Some(Command::Currency { amount, code }) => currency_once(amount, &code).await,
        }
    }
}

/// Prompt for and persist the exchange-rate API URL.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let prompt = Text::new("Exchange-rate API URL (key embedded):");
    let prompt = match config.api_url() {
        Some(current) => prompt.with_initial_value(current),
        None => prompt,
    };

    let api_url = prompt.prompt()?;
    config.set_api_url(api_url.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn temp_once(value: f64, from: &str, to: &str) -> anyhow::Result<()> {
    let from = TempUnit::try_from(from)?;
    let to = TempUnit::try_from(to)?;

    let value = temperature::validate_temperature(value)?;
    let result = temperature::convert(value, from, to);

    println!("{value} {from} is {result:.2} {to}.");
    Ok(())
}

async fn currency_once(amount: f64, code: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let amount = currency::validate_amount(amount)?;
    let code = code.to_uppercase();
    let result = currency::convert_currency(&provider, amount, &code).await?;

    println!("{amount} EUR is {result:.2} {code}");
    Ok(())
}
