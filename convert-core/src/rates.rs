use std::{collections::HashMap, fmt::Debug};

use async_trait::async_trait;

use crate::{Config, error::ConvertError, rates::exchangerate_api::ExchangeRateApiProvider};

pub mod exchangerate_api;

/// Mapping of currency code to EUR-relative conversion factor.
///
/// Fetched fresh for every conversion request and discarded afterwards;
/// there is no caching between calls.
#[derive(Debug, Clone, Default)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        RateTable(iter.into_iter().collect())
    }
}

impl From<HashMap<String, f64>> for RateTable {
    fn from(rates: HashMap<String, f64>) -> Self {
        RateTable(rates)
    }
}

/// Source of current EUR-based exchange rates.
///
/// Each call is an independent request/response; implementations hold no
/// state between calls and never retry.
#[async_trait]
pub trait RateProvider: Send + Sync + Debug {
    async fn fetch_rates(&self) -> Result<RateTable, ConvertError>;
}

/// Construct the exchange-rate provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<ExchangeRateApiProvider> {
    let api_url = config.api_url().ok_or_else(|| {
        anyhow::anyhow!(
            "No exchange-rate API endpoint configured.\n\
             Hint: run `convert-cli configure` and enter your API URL."
        )
    })?;

    Ok(ExchangeRateApiProvider::new(api_url.to_owned()))
}
