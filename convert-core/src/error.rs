use thiserror::Error;

/// Errors produced by the conversion engine and the rate provider.
///
/// None of these are fatal to the caller: the CLI reports the message and
/// keeps its menu loop running.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input value was non-numeric or outside the accepted range.
    #[error("{0}")]
    InvalidInput(String),

    /// Exchange rates could not be fetched (network failure, HTTP error,
    /// or the API reported a failure).
    #[error("Exchange rates unavailable: {0}")]
    RateUnavailable(String),

    /// The requested currency code is absent from the fetched rate table.
    #[error("Conversion rate for {0} not found")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_part() {
        let err = ConvertError::UnknownCurrency("XYZ".to_string());
        assert!(err.to_string().contains("XYZ"));

        let err = ConvertError::RateUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("connection refused"));
    }
}
