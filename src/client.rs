//! High-level client — `CoinsClient` with nested sub-client accessors.

use crate::domain::coin::client::Coins;
use crate::error::SdkError;
use crate::http::CoinsHttp;

use std::time::Duration;

pub use crate::domain::coin::client::Coins as CoinsSubClient;

/// Environment variable overriding the catalog endpoint.
pub const API_URL_ENV: &str = "COINLIST_API_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_SECS_ENV: &str = "COINLIST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the coin catalog.
#[derive(Debug, Clone)]
pub struct CoinsClient {
    pub(crate) http: CoinsHttp,
}

impl CoinsClient {
    pub fn builder() -> CoinsClientBuilder {
        CoinsClientBuilder::default()
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CoinsClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for CoinsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CoinsClientBuilder {
    /// Defaults, overridden by [`API_URL_ENV`] and [`TIMEOUT_SECS_ENV`] when set.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder.base_url = url;
        }
        if let Ok(secs) = std::env::var(TIMEOUT_SECS_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                SdkError::Other(format!("{TIMEOUT_SECS_ENV} must be whole seconds, got {secs:?}"))
            })?;
            builder.timeout = Duration::from_secs(secs);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CoinsClient, SdkError> {
        tracing::debug!(
            base_url = %self.base_url,
            timeout = ?self.timeout,
            "Building coins client"
        );
        Ok(CoinsClient {
            http: CoinsHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
