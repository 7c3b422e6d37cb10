use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::ConvertError, rates::RateTable};

use super::RateProvider;

/// Client for the exchangerate-api.com style endpoint.
///
/// The configured URL carries the API key and the EUR base, e.g.
/// `https://v6.exchangerate-api.com/v6/<KEY>/latest/EUR`. One GET per
/// `fetch_rates` call, no retries.
#[derive(Debug, Clone)]
pub struct ExchangeRateApiProvider {
    api_url: String,
    http: Client,
}

impl ExchangeRateApiProvider {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_rates: Option<HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_rates(&self) -> Result<RateTable, ConvertError> {
        let res = self
            .http
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| ConvertError::RateUnavailable(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ConvertError::RateUnavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(ConvertError::RateUnavailable(format!(
                "request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: RatesResponse = serde_json::from_str(&body).map_err(|e| {
            ConvertError::RateUnavailable(format!("failed to parse rates JSON: {e}"))
        })?;

        if parsed.result != "success" {
            let reason = parsed.error_type.unwrap_or_else(|| "Unknown error".to_string());
            return Err(ConvertError::RateUnavailable(reason));
        }

        let rates = parsed.conversion_rates.unwrap_or_default();
        if rates.is_empty() {
            return Err(ConvertError::RateUnavailable(
                "response contained no conversion rates".to_string(),
            ));
        }

        Ok(RateTable::from(rates))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // MAX may land inside a multi-byte character; back up to a boundary.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
