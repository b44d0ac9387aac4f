//! Low-level HTTP client — `CoinsHttp`.
//!
//! One method per endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). No retries: a request either succeeds or
//! surfaces its error.

use crate::domain::coin::wire::CoinResponse;
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the coin catalog.
#[derive(Debug, Clone)]
pub struct CoinsHttp {
    base_url: String,
    client: Client,
}

impl CoinsHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Coins ────────────────────────────────────────────────────────────

    /// The catalog is served from the endpoint root as a bare JSON array.
    pub async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError> {
        let url = format!("{}/", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url = %url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "Response from {}", url);

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return decode_body(&bytes);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }
}

/// Decode a success body, telling an empty payload apart from a malformed one.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(HttpError::EmptyPayload);
    }
    Ok(serde_json::from_slice(bytes)?)
}
