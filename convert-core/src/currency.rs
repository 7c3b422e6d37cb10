use std::convert::TryFrom;

use crate::{error::ConvertError, rates::RateProvider};

/// Largest accepted amount, one trillion EUR.
pub const MAX_AMOUNT: f64 = 1e12;

/// Currencies the CLI offers as conversion targets. `convert_currency`
/// itself accepts any code the rate table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCurrency {
    Usd,
    Gbp,
    Inr,
    Jpy,
    Aud,
    Cad,
}

impl TargetCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetCurrency::Usd => "USD",
            TargetCurrency::Gbp => "GBP",
            TargetCurrency::Inr => "INR",
            TargetCurrency::Jpy => "JPY",
            TargetCurrency::Aud => "AUD",
            TargetCurrency::Cad => "CAD",
        }
    }

    pub const fn all() -> &'static [TargetCurrency] {
        &[
            TargetCurrency::Usd,
            TargetCurrency::Gbp,
            TargetCurrency::Inr,
            TargetCurrency::Jpy,
            TargetCurrency::Aud,
            TargetCurrency::Cad,
        ]
    }
}

impl std::fmt::Display for TargetCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TargetCurrency {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let upper = value.to_uppercase();

        match upper.as_str() {
            "USD" => Ok(TargetCurrency::Usd),
            "GBP" => Ok(TargetCurrency::Gbp),
            "INR" => Ok(TargetCurrency::Inr),
            "JPY" => Ok(TargetCurrency::Jpy),
            "AUD" => Ok(TargetCurrency::Aud),
            "CAD" => Ok(TargetCurrency::Cad),
            _ => Err(anyhow::anyhow!(
                "Unknown currency '{value}'. Supported currencies: USD, GBP, INR, JPY, AUD, CAD."
            )),
        }
    }
}

/// Check that a monetary amount is a valid positive numeric value.
pub fn validate_amount(value: f64) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(
            "The amount must be a numeric value.".to_string(),
        ));
    }
    if value <= 0.0 || value > MAX_AMOUNT {
        return Err(ConvertError::InvalidInput(
            "Amount must be positive and less than 1 trillion.".to_string(),
        ));
    }
    Ok(value)
}

/// Convert an EUR amount to the target currency at the current rate.
///
/// Fetches a fresh rate table from the provider on every call.
pub async fn convert_currency(
    provider: &dyn RateProvider,
    amount: f64,
    target_code: &str,
) -> Result<f64, ConvertError> {
    let rates = provider.fetch_rates().await?;

    let rate = rates
        .rate(target_code)
        .ok_or_else(|| ConvertError::UnknownCurrency(target_code.to_string()))?;

    Ok(amount * rate)
}

pub async fn eur_to_usd(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Usd.as_str()).await
}

pub async fn eur_to_gbp(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Gbp.as_str()).await
}

pub async fn eur_to_inr(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Inr.as_str()).await
}

pub async fn eur_to_jpy(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Jpy.as_str()).await
}

pub async fn eur_to_aud(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Aud.as_str()).await
}

pub async fn eur_to_cad(provider: &dyn RateProvider, amount: f64) -> Result<f64, ConvertError> {
    convert_currency(provider, amount, TargetCurrency::Cad.as_str()).await
}
