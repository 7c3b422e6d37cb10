use std::convert::TryFrom;

use crate::error::ConvertError;

/// Coldest accepted temperature, absolute zero.
pub const MIN_TEMPERATURE: f64 = -273.15;
/// Hottest accepted temperature.
pub const MAX_TEMPERATURE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
            TempUnit::Kelvin => "Kelvin",
        }
    }

    pub const fn all() -> &'static [TempUnit] {
        &[TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin]
    }
}

impl std::fmt::Display for TempUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TempUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(TempUnit::Celsius),
            "fahrenheit" | "f" => Ok(TempUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TempUnit::Kelvin),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit, kelvin."
            )),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + 273.15
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

pub fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - 273.15) * 9.0 / 5.0 + 32.0
}

/// Convert `value` from one unit to another. Same-unit conversion is the
/// identity.
pub fn convert(value: f64, from: TempUnit, to: TempUnit) -> f64 {
    use TempUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
        (Celsius, Kelvin) => celsius_to_kelvin(value),
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
        (Fahrenheit, Kelvin) => fahrenheit_to_kelvin(value),
        (Kelvin, Celsius) => kelvin_to_celsius(value),
        (Kelvin, Fahrenheit) => kelvin_to_fahrenheit(value),
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}

/// Check that a temperature input is a realistic numeric value.
///
/// Accepts values between absolute zero and 1000; NaN and infinities are
/// rejected along with out-of-range numbers.
pub fn validate_temperature(value: f64) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(
            "The temperature value must be a numeric value.".to_string(),
        ));
    }
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
        return Err(ConvertError::InvalidInput(
            "Temperature must be between -273.15°C and 1000°C.".to_string(),
        ));
    }
    Ok(value)
}
