use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::RateError;

/// One day's parsed rate table, keyed by currency code. All rates are
/// relative to the service's fixed base currency (the Euro). Fetched fresh
/// per call; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDocument {
    rates: BTreeMap<String, f64>,
}

/// Wire shape of the response. Top-level fields other than `rates` (success
/// flag, date echo, base currency) are ignored.
#[derive(Debug, Deserialize)]
struct RawDocument {
    rates: Option<BTreeMap<String, f64>>,
}

impl RateDocument {
    /// Parse a response body. Invalid JSON or non-numeric rate values are a
    /// parse error; a missing `rates` object is a schema error.
    pub fn parse(body: &str) -> Result<Self, RateError> {
        let raw: RawDocument = serde_json::from_str(body)?;
        let rates = raw.rates.ok_or(RateError::MissingRates)?;
        Ok(Self { rates })
    }

    /// Rate for a single currency against the base currency.
    pub fn rate(&self, code: &str) -> Result<f64, RateError> {
        self.rates.get(code).copied().ok_or_else(|| {
            RateError::MissingCurrency {
                code: code.to_string(),
            }
        })
    }
}
