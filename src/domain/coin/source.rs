//! Coin data sources — the capability that supplies the full dataset.

use super::Coin;
use crate::error::SdkError;
use async_lock::RwLock;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(feature = "http")]
use crate::client::CoinsClient;

/// Fetch every coin, once per call.
#[async_trait]
pub trait CoinDataSource: Send + Sync {
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError>;
}

// ─── HTTP ────────────────────────────────────────────────────────────────────

/// Live source backed by the catalog endpoint. One GET per fetch, no retry.
#[cfg(feature = "http")]
#[derive(Clone)]
pub struct HttpCoinSource {
    client: CoinsClient,
}

#[cfg(feature = "http")]
impl HttpCoinSource {
    pub fn new(client: CoinsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CoinsClient {
        &self.client
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CoinDataSource for HttpCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError> {
        self.client.coins().all().await
    }
}

// ─── In-memory ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct MockState {
    coins: Vec<Coin>,
    should_fail: bool,
    fetch_count: usize,
}

/// In-memory fixture source.
///
/// Clones share the same fixture, so a test can keep a handle and change the
/// coins or the failure flag after injecting the source.
#[derive(Debug, Clone, Default)]
pub struct MockCoinSource {
    state: Arc<RwLock<MockState>>,
}

impl MockCoinSource {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self::with_failure(coins, false)
    }

    pub fn with_failure(coins: Vec<Coin>, should_fail: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState {
                coins,
                should_fail,
                fetch_count: 0,
            })),
        }
    }

    pub async fn set_coins(&self, coins: Vec<Coin>) {
        self.state.write().await.coins = coins;
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        self.state.write().await.should_fail = should_fail;
    }

    /// Number of fetches served so far, failed ones included.
    pub async fn fetch_count(&self) -> usize {
        self.state.read().await.fetch_count
    }
}

#[async_trait]
impl CoinDataSource for MockCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<Coin>, SdkError> {
        let mut state = self.state.write().await;
        state.fetch_count += 1;
        if state.should_fail {
            return Err(SdkError::Other("Failed to fetch coins".to_string()));
        }
        Ok(state.coins.clone())
    }
}
