use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Request envelope for the rate-service transport. The service is addressed
/// with plain GETs, so only the URL is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Blocking transport contract. Implementations must be safe to share across
/// threads; the reader itself holds no mutable state.
pub trait HttpClient: Send + Sync + std::fmt::Debug {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production transport over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::blocking::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::blocking::Client::builder()
                    .user_agent("xrate/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            ),
        }
    }

    /// Wrap a caller-configured client, e.g. one carrying a timeout.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self.client.get(&request.url).send().map_err(|e| {
            if e.is_timeout() {
                HttpError::new(format!("request timeout: {e}"))
            } else if e.is_connect() {
                HttpError::new(format!("connection failed: {e}"))
            } else {
                HttpError::new(format!("request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}

/// Deterministic offline transport for tests: serves canned responses keyed
/// by URL fragment. Unmatched requests get a 404.
#[derive(Debug, Default)]
pub struct FixtureHttpClient {
    routes: Vec<(String, HttpResponse)>,
}

impl FixtureHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url_fragment: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_response(url_fragment, HttpResponse::ok_json(body))
    }

    pub fn with_response(mut self, url_fragment: impl Into<String>, response: HttpResponse) -> Self {
        self.routes.push((url_fragment.into(), response));
        self
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        for (fragment, response) in &self.routes {
            if request.url.contains(fragment.as_str()) {
                return Ok(response.clone());
            }
        }
        Ok(HttpResponse {
            status: 404,
            body: String::new(),
        })
    }
}
