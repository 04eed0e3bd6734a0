use thiserror::Error;

use crate::http::HttpError;

/// Error taxonomy for rate retrieval.
///
/// Every error propagates to the immediate caller; nothing is retried,
/// swallowed, or logged internally.
#[derive(Debug, Error)]
pub enum RateError {
    /// The access key environment variable is unset or empty. Raised at
    /// construction, before any network I/O.
    #[error("access key environment variable '{var}' is not set")]
    MissingAccessKey { var: &'static str },

    /// Connection or request failure, or a non-success upstream status.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The response body is not valid JSON, or rate values are not numeric.
    #[error("malformed rate document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carries no top-level `rates` object.
    #[error("rate document has no 'rates' object")]
    MissingRates,

    /// The requested currency is absent from the date's `rates` object.
    #[error("no rate for currency '{code}' in this date's document")]
    MissingCurrency { code: String },

    /// The cross-rate divisor is exactly zero, so the ratio is undefined.
    #[error("rate for currency '{code}' is zero; cross rate is undefined")]
    ZeroRate { code: String },
}

impl RateError {
    /// Stable machine-readable code per variant.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingAccessKey { .. } => "rate.missing_access_key",
            Self::Transport(_) => "rate.transport",
            Self::Parse(_) => "rate.parse",
            Self::MissingRates => "rate.missing_rates",
            Self::MissingCurrency { .. } => "rate.missing_currency",
            Self::ZeroRate { .. } => "rate.zero_rate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_variant() {
        let missing = RateError::MissingCurrency {
            code: String::from("USD"),
        };
        assert_eq!(missing.code(), "rate.missing_currency");
        assert_eq!(RateError::MissingRates.code(), "rate.missing_rates");
        assert_ne!(missing.code(), RateError::MissingRates.code());
    }
}
