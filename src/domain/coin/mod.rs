//! Coin domain — coin records, filter predicates, list state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod list;
pub mod source;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use list::CoinList;
pub use source::{CoinDataSource, MockCoinSource};
#[cfg(feature = "http")]
pub use source::HttpCoinSource;
pub use state::{CoinListState, FetchOutcome, FetchTicket, View};

// ─── Coin ────────────────────────────────────────────────────────────────────

/// One asset in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub name: String,
    pub symbol: String,
    /// Category tag, e.g. `"coin"` or `"token"`.
    #[serde(rename = "type")]
    pub coin_type: String,
    pub is_active: bool,
    pub is_new: bool,
}

impl Coin {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        coin_type: impl Into<String>,
        is_active: bool,
        is_new: bool,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            coin_type: coin_type.into(),
            is_active,
            is_new,
        }
    }

    /// Case-insensitive substring match on name or symbol.
    ///
    /// An empty query matches every coin.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.symbol.to_lowercase().contains(&needle)
    }
}

// ─── CoinFilter ──────────────────────────────────────────────────────────────

/// Status/type predicates. `None` means "don't care".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoinFilter {
    pub is_active: Option<bool>,
    pub is_new: Option<bool>,
    pub coin_type: Option<String>,
}

impl CoinFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn newly_listed(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    pub fn of_type(mut self, coin_type: &str) -> Self {
        self.coin_type = Some(coin_type.to_string());
        self
    }

    /// True when no predicate is set, i.e. the filter keeps everything.
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.is_new.is_none() && self.coin_type.is_none()
    }

    /// Conjunction of every set predicate. Type comparison is exact.
    pub fn matches(&self, coin: &Coin) -> bool {
        self.is_active.map_or(true, |a| coin.is_active == a)
            && self.is_new.map_or(true, |n| coin.is_new == n)
            && self
                .coin_type
                .as_deref()
                .map_or(true, |t| coin.coin_type == t)
    }
}
