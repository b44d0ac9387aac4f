//! # coinlist
//!
//! A Rust SDK for browsing a crypto coin catalog: fetch the list once, then
//! search and filter it locally.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Coin records, filters, and the list state container (always available)
//! 2. **Data Source** — `CoinDataSource` with live HTTP and in-memory implementations
//! 3. **HTTP API** — `CoinsHttp`, one unauthenticated GET with JSON decoding
//! 4. **High-Level Client** — `CoinsClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinlist::prelude::*;
//!
//! let client = CoinsClient::builder().build()?;
//! let mut list = CoinList::new(HttpCoinSource::new(client));
//!
//! list.on_change(|| println!("coin list changed"));
//! list.fetch().await;
//! list.search("btc");
//! list.apply_filters(CoinFilter::new().active(true));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the catalog endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinsClient` — the entry point for live data.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::coin::{
        Coin, CoinDataSource, CoinFilter, CoinList, CoinListState, FetchOutcome, FetchTicket,
        MockCoinSource, View,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinsClient, CoinsClientBuilder, CoinsSubClient};
    #[cfg(feature = "http")]
    pub use crate::domain::coin::HttpCoinSource;
}
