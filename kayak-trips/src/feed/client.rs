//! Feed source configuration and loading.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use super::error::FeedError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the calendar text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// A previously exported `.ics` file
    File(PathBuf),
    /// A private calendar feed URL
    Url(String),
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::File(path) => write!(f, "{}", path.display()),
            FeedSource::Url(url) => f.write_str(url),
        }
    }
}

/// Configuration for loading a calendar feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// File or URL to read
    pub source: FeedSource,
    /// Request timeout in seconds (URL sources only)
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config that reads a local file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FeedSource::File(path.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a config that fetches a feed URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            source: FeedSource::Url(url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Loader for calendar feed text.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    source: FeedSource,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            source: config.source,
        })
    }

    /// The configured source.
    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Load the raw calendar text.
    pub async fn fetch(&self) -> Result<String, FeedError> {
        match &self.source {
            FeedSource::File(path) => read_file(path),
            FeedSource::Url(url) => self.fetch_url(url).await,
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String, FeedError> {
        info!(url, "fetching calendar feed");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url, status = status.as_u16(), "calendar feed request failed");
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        info!(bytes = body.len(), "fetched calendar feed");
        Ok(body)
    }
}

/// Read calendar text from a local file.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, FeedError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}
