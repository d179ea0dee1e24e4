use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::ProfileConfig;
use crate::profile::Profile;

/// Errors raised while loading the profile (`ProfileLoadFailed`).
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Profile request to '{url}' timed out after {seconds}s")]
    Timeout { url: Url, seconds: u64 },

    #[error("Profile request to '{url}' failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Profile request to '{url}' returned HTTP {status}")]
    Status { url: Url, status: u16 },

    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProfileError {
    /// Short text for the inline error state.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProfileError::Read { .. } => "Profile file could not be read",
            ProfileError::Client(_) | ProfileError::Request { .. } => {
                "Profile could not be fetched"
            }
            ProfileError::Timeout { .. } => "Profile request timed out",
            ProfileError::Status { .. } => "Profile server returned an error",
            ProfileError::Parse(_) => "Profile data is malformed",
        }
    }
}

/// Location of the profile document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
    Http(Url),
}

impl ProfileSource {
    /// `http://` and `https://` become remote sources, everything else a path.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            if let Ok(url) = Url::parse(trimmed) {
                return ProfileSource::Http(url);
            }
        }
        ProfileSource::File(PathBuf::from(trimmed))
    }
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::File(path) => write!(f, "{}", path.display()),
            ProfileSource::Http(url) => write!(f, "{}", url),
        }
    }
}

/// Loads the profile record once at startup.
pub struct ProfileStore {
    source: ProfileSource,
    client: Client,
    timeout: Duration,
}

impl ProfileStore {
    pub fn new(config: &ProfileConfig) -> Result<Self, ProfileError> {
        Self::with_source(ProfileSource::parse(&config.source), config.timeout_seconds)
    }

    pub fn with_source(source: ProfileSource, timeout_seconds: u64) -> Result<Self, ProfileError> {
        let timeout = Duration::from_secs(timeout_seconds.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProfileError::Client)?;
        Ok(Self {
            source,
            client,
            timeout,
        })
    }

    pub fn source(&self) -> &ProfileSource {
        &self.source
    }

    /// Fetch and parse the profile document.
    pub async fn load(&self) -> Result<Profile, ProfileError> {
        tracing::debug!(source = %self.source, "Loading profile");
        let body = match &self.source {
            ProfileSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ProfileError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
            ProfileSource::Http(url) => self.fetch(url).await?,
        };

        let profile = Profile::from_json(&body)?;
        tracing::info!(source = %self.source, name = %profile.name, "Profile loaded");
        Ok(profile)
    }

    async fn fetch(&self, url: &Url) -> Result<String, ProfileError> {
        let request_error = |source: reqwest::Error| {
            if source.is_timeout() {
                ProfileError::Timeout {
                    url: url.clone(),
                    seconds: self.timeout.as_secs(),
                }
            } else {
                ProfileError::Request {
                    url: url.clone(),
                    source,
                }
            }
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}
