//! Historical currency exchange rates from a fixer.io-style JSON API.
//!
//! This crate contains:
//! - [`ExchangeRateReader`], the blocking client that fetches one date's rate
//!   document per call and returns a single rate or a derived cross rate
//! - The transport seam ([`HttpClient`]) with a production reqwest
//!   implementation and a fixture implementation for offline tests
//! - The [`RateError`] taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use xrate_core::ExchangeRateReader;
//!
//! fn usd_on(year: i32, month: u8, day: u8) -> Result<f64, xrate_core::RateError> {
//!     let reader = ExchangeRateReader::from_env("http://data.fixer.io/api/")?;
//!     reader.exchange_rate("USD", year, month, day)
//! }
//! ```

pub mod date;
pub mod document;
pub mod error;
pub mod http;
pub mod reader;

pub use date::RateDate;
pub use document::RateDocument;
pub use error::RateError;
pub use http::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use reader::{ExchangeRateReader, ACCESS_KEY_VAR};
