//! Interactive menu loops.
//!
//! Every conversion error is reported and the loop keeps running;
//! cancelling a prompt (Esc/Ctrl-C) steps back one menu level.

use anyhow::Result;
use convert_core::{
    Config, RateProvider, TargetCurrency, TempUnit, currency, provider_from_config, temperature,
};
use inquire::{CustomType, InquireError, Select};

const TEMPERATURE_MENU: &str = "Temperature conversions";
const CURRENCY_MENU: &str = "Currency conversions";
const EXIT: &str = "Exit";
const BACK: &str = "Back to main menu";

pub async fn main_menu() -> Result<()> {
    loop {
        let choice = match Select::new(
            "Conversion menu",
            vec![TEMPERATURE_MENU, CURRENCY_MENU, EXIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            TEMPERATURE_MENU => temperature_menu()?,
            CURRENCY_MENU => currency_menu().await?,
            _ => break,
        }
    }

    Ok(())
}

fn temperature_menu() -> Result<()> {
    let conversions: [(&str, TempUnit, TempUnit); 6] = [
        ("Celsius to Fahrenheit", TempUnit::Celsius, TempUnit::Fahrenheit),
        ("Celsius to Kelvin", TempUnit::Celsius, TempUnit::Kelvin),
        ("Fahrenheit to Celsius", TempUnit::Fahrenheit, TempUnit::Celsius),
        ("Fahrenheit to Kelvin", TempUnit::Fahrenheit, TempUnit::Kelvin),
        ("Kelvin to Celsius", TempUnit::Kelvin, TempUnit::Celsius),
        ("Kelvin to Fahrenheit", TempUnit::Kelvin, TempUnit::Fahrenheit),
    ];

    loop {
        let mut options: Vec<&str> = conversions.iter().map(|(label, _, _)| *label).collect();
        options.push(BACK);

        let choice = match Select::new("Temperature conversions", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let Some((_, from, to)) = conversions.iter().find(|(label, _, _)| *label == choice) else {
            break;
        };

        let Some(value) = prompt_number("Enter the temperature value:")? else {
            continue;
        };

        match temperature::validate_temperature(value) {
            Ok(value) => {
                let result = temperature::convert(value, *from, *to);
                println!("{value} {from} is {result:.2} {to}.");
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

async fn currency_menu() -> Result<()> {
    let config = Config::load()?;
    let provider = match provider_from_config(&config) {
        Ok(provider) => provider,
        Err(e) => {
            // Not fatal: report and drop back to the main menu.
            println!("{e}");
            return Ok(());
        }
    };

    let labels: Vec<String> = TargetCurrency::all()
        .iter()
        .map(|c| format!("EUR to {c}"))
        .collect();

    loop {
        let mut options: Vec<&str> = labels.iter().map(String::as_str).collect();
        options.push(BACK);

        let choice = match Select::new("Currency conversions", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if choice == BACK {
            break;
        }

        let position = labels.iter().position(|label| label == choice);
        let Some(target) = position.and_then(|i| TargetCurrency::all().get(i)) else {
            break;
        };

        let Some(amount) = prompt_number("Enter the amount in EUR:")? else {
            continue;
        };

        match convert_amount(&provider, amount, *target).await {
            Ok(result) => println!("{amount} EUR is {result:.2} {target}"),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

async fn convert_amount(
    provider: &dyn RateProvider,
    amount: f64,
    target: TargetCurrency,
) -> Result<f64, convert_core::ConvertError> {
    let amount = currency::validate_amount(amount)?;
    currency::convert_currency(provider, amount, target.as_str()).await
}

/// Prompt for a numeric value; `None` means the prompt was cancelled.
fn prompt_number(prompt: &str) -> Result<Option<f64>> {
    match CustomType::<f64>::new(prompt)
        .with_error_message("Please enter a numeric value")
        .prompt()
    {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
