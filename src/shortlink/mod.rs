//! Short links for the card's page URL via an external shortening service.

mod state;

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

pub use state::{ShortLinkIntent, ShortLinkReducer, ShortLinkResult, ShortLinkState};

use crate::config::ShortenerConfig;

/// Errors of kind `ShortenFailed`.
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("Invalid shortener endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Short link request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Short link request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Shortener returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Shortener returned an invalid short URL: {body:?}")]
    InvalidResponse { body: String },
}

impl ShortenError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ShortenError::InvalidEndpoint { .. } | ShortenError::Client(_) => {
                "Short link service is misconfigured"
            }
            ShortenError::Timeout { .. } => "Short link request timed out",
            ShortenError::Request(_) => "Could not reach the short link service",
            ShortenError::Status { .. } | ShortenError::InvalidResponse { .. } => {
                "Short link service returned an error"
            }
        }
    }
}

/// Client for a GET-style shortener that answers with the short URL as text.
pub struct ShortLinkService {
    client: Client,
    endpoint: Url,
    query_param: String,
    timeout: Duration,
}

impl ShortLinkService {
    pub fn new(config: &ShortenerConfig) -> Result<Self, ShortenError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| ShortenError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        let timeout = Duration::from_secs(config.timeout_seconds.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ShortenError::Client)?;

        Ok(Self {
            client,
            endpoint,
            query_param: config.query_param.clone(),
            timeout,
        })
    }

    /// Endpoint with `long_url` percent-encoded into the query.
    pub fn request_url(&self, long_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, long_url);
        url
    }

    pub async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        let url = self.request_url(long_url);
        tracing::debug!(endpoint = %self.endpoint, long_url = %long_url, "Requesting short link");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.request_error(err))?;

        if !status.is_success() {
            tracing::warn!(status = %status, body = %body, "Shortener returned an error");
            return Err(ShortenError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let short_url = body.trim();
        if Url::parse(short_url).is_err() {
            return Err(ShortenError::InvalidResponse {
                body: short_url.to_string(),
            });
        }

        tracing::info!(short_url = %short_url, "Short link created");
        Ok(short_url.to_string())
    }

    fn request_error(&self, err: reqwest::Error) -> ShortenError {
        if err.is_timeout() {
            ShortenError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ShortenError::Request(err)
        }
    }
}
