//! Core library for the `convert` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Temperature and currency conversion arithmetic with input validation
//! - Abstraction over the exchange-rate provider
//!
//! It is used by `convert-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod currency;
pub mod error;
pub mod rates;
pub mod temperature;

pub use config::Config;
pub use currency::TargetCurrency;
pub use error::ConvertError;
pub use rates::{RateProvider, RateTable, provider_from_config};
pub use temperature::TempUnit;
