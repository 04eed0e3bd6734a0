use std::env;
use std::sync::Arc;

use crate::date::RateDate;
use crate::document::RateDocument;
use crate::error::RateError;
use crate::http::{HttpClient, HttpError, HttpRequest, ReqwestHttpClient};

/// Environment variable holding the service access key.
pub const ACCESS_KEY_VAR: &str = "FIXER_IO_ACCESS_KEY";

/// Blocking client for a fixer.io-style historical exchange rate service.
///
/// Holds an immutable (base URL, access key) pair and a pluggable transport.
/// Each call fetches the requested date's document fresh and blocks until the
/// response is fully read; there is no caching, no retry, and no timeout
/// beyond what the transport itself imposes. The base URL is used as-is for
/// concatenation; no trailing slash is forced.
#[derive(Debug, Clone)]
pub struct ExchangeRateReader {
    base_url: String,
    access_key: String,
    http_client: Arc<dyn HttpClient>,
}

impl ExchangeRateReader {
    /// Build a reader with an explicitly injected access key and the
    /// production transport.
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self::with_http_client(base_url, access_key, Arc::new(ReqwestHttpClient::new()))
    }

    /// Build a reader whose access key comes from [`ACCESS_KEY_VAR`]. Fails
    /// before any network I/O if the variable is unset or empty.
    pub fn from_env(base_url: impl Into<String>) -> Result<Self, RateError> {
        let access_key = env::var(ACCESS_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(RateError::MissingAccessKey {
                var: ACCESS_KEY_VAR,
            })?;
        Ok(Self::new(base_url, access_key))
    }

    /// Build a reader over a caller-supplied transport.
    pub fn with_http_client(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            access_key: access_key.into(),
            http_client,
        }
    }

    /// Exchange rate for `currency` against the base currency (the Euro) on
    /// the given date.
    pub fn exchange_rate(
        &self,
        currency: &str,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<f64, RateError> {
        let document = self.fetch_document(RateDate::new(year, month, day))?;
        document.rate(currency)
    }

    /// Exchange rate of `from` against `to` on the given date, derived as
    /// `rate(from) / rate(to)` from a single fetched document. A zero `to`
    /// rate is reported as [`RateError::ZeroRate`] rather than infinity.
    pub fn cross_rate(
        &self,
        from: &str,
        to: &str,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<f64, RateError> {
        let document = self.fetch_document(RateDate::new(year, month, day))?;
        let from_rate = document.rate(from)?;
        let to_rate = document.rate(to)?;
        if to_rate == 0.0 {
            return Err(RateError::ZeroRate {
                code: to.to_string(),
            });
        }
        Ok(from_rate / to_rate)
    }

    fn request_url(&self, date: RateDate) -> String {
        format!(
            "{}{date}?access_key={}",
            self.base_url,
            urlencoding::encode(&self.access_key)
        )
    }

    fn fetch_document(&self, date: RateDate) -> Result<RateDocument, RateError> {
        let request = HttpRequest::get(self.request_url(date));
        let response = self.http_client.execute(request)?;
        if !response.is_success() {
            return Err(RateError::Transport(HttpError::new(format!(
                "rate service returned status {}",
                response.status
            ))));
        }
        RateDocument::parse(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FixtureHttpClient;

    fn reader_with(client: FixtureHttpClient) -> ExchangeRateReader {
        ExchangeRateReader::with_http_client("http://rates.test/api/", "dummy-key", Arc::new(client))
    }

    #[test]
    fn request_url_zero_pads_month_and_day() {
        let reader = reader_with(FixtureHttpClient::new());
        let url = reader.request_url(RateDate::new(2010, 6, 5));
        assert_eq!(url, "http://rates.test/api/2010-06-05?access_key=dummy-key");
    }

    #[test]
    fn request_url_percent_encodes_the_access_key() {
        let reader = ExchangeRateReader::with_http_client(
            "http://rates.test/api/",
            "key with spaces",
            Arc::new(FixtureHttpClient::new()),
        );
        let url = reader.request_url(RateDate::new(2010, 6, 25));
        assert!(url.ends_with("?access_key=key%20with%20spaces"));
    }

    #[test]
    fn base_url_is_concatenated_without_normalization() {
        let reader = ExchangeRateReader::with_http_client(
            "http://rates.test/api",
            "dummy-key",
            Arc::new(FixtureHttpClient::new()),
        );
        let url = reader.request_url(RateDate::new(2010, 6, 25));
        assert!(url.starts_with("http://rates.test/api2010-06-25"));
    }

    #[test]
    fn non_success_status_is_a_transport_error() {
        let reader = reader_with(FixtureHttpClient::new());
        let err = reader
            .exchange_rate("USD", 1999, 1, 1)
            .expect_err("fixture has no route for this date");
        assert!(matches!(err, RateError::Transport(_)));
    }

    #[test]
    fn from_env_fails_fast_without_an_access_key() {
        // Remove/set in a single test to avoid races on the shared variable.
        env::remove_var(ACCESS_KEY_VAR);
        let err = ExchangeRateReader::from_env("http://rates.test/api/")
            .expect_err("variable is unset");
        assert!(matches!(err, RateError::MissingAccessKey { var } if var == ACCESS_KEY_VAR));

        env::set_var(ACCESS_KEY_VAR, "");
        let err = ExchangeRateReader::from_env("http://rates.test/api/")
            .expect_err("variable is empty");
        assert!(matches!(err, RateError::MissingAccessKey { .. }));

        env::set_var(ACCESS_KEY_VAR, "a-real-key");
        assert!(ExchangeRateReader::from_env("http://rates.test/api/").is_ok());
        env::remove_var(ACCESS_KEY_VAR);
    }
}
