//! Coin list state container — app-owned, SDK-provided update logic.

use super::{Coin, CoinFilter};
use crate::error::SdkError;
use std::fmt;

/// Change notification slot. Invoked with no payload; read the state afterwards.
pub type ChangeCallback = Box<dyn FnMut() + Send>;

/// Which derived view is currently shown.
///
/// Filters and search do not compose: each replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    All,
    Filtered(CoinFilter),
    Searched(String),
}

/// Handle for one issued fetch. Consumed by [`CoinListState::complete_fetch`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Result of absorbing a fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Dataset replaced; `count` coins now visible.
    Applied { count: usize },
    /// Source failed; dataset and view untouched.
    Failed(SdkError),
    /// A newer fetch was already applied; result discarded.
    Stale,
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied { .. })
    }
}

/// Authoritative coin dataset plus the derived visible view.
///
/// `visible` is always an order-preserving subset of `all`. `all` only
/// changes when a fetch completes. There is exactly one change slot;
/// registering a callback replaces the previous one.
#[derive(Default)]
pub struct CoinListState {
    all: Vec<Coin>,
    visible: Vec<Coin>,
    view: View,
    on_change: Option<ChangeCallback>,
    last_issued: u64,
    last_applied: u64,
    last_error: Option<String>,
}

impl CoinListState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Notification ─────────────────────────────────────────────────────

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }

    // ── Fetch bookkeeping ────────────────────────────────────────────────

    /// Issue a ticket for a fetch about to start.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        FetchTicket(self.last_issued)
    }

    /// Absorb the result of the fetch identified by `ticket`.
    ///
    /// The most recently issued fetch wins: a result older than the last
    /// applied one is dropped. On failure nothing changes except
    /// [`last_error`](Self::last_error), and no notification fires.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Coin>, SdkError>,
    ) -> FetchOutcome {
        if ticket.0 <= self.last_applied {
            if let Err(e) = &result {
                tracing::warn!(ticket = ticket.0, error = %e, "Error fetching coins");
            }
            tracing::debug!(
                ticket = ticket.0,
                applied = self.last_applied,
                "Discarding stale coin fetch"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(coins) => {
                self.last_applied = ticket.0;
                self.last_error = None;
                let count = coins.len();
                self.replace(coins);
                FetchOutcome::Applied { count }
            }
            Err(e) => {
                tracing::warn!(ticket = ticket.0, error = %e, "Error fetching coins");
                self.last_error = Some(e.to_string());
                FetchOutcome::Failed(e)
            }
        }
    }

    fn replace(&mut self, coins: Vec<Coin>) {
        self.visible = coins.clone();
        self.all = coins;
        self.view = View::All;
        tracing::debug!(total = self.all.len(), "Coin list replaced");
        self.notify();
    }

    // ── Derived view ─────────────────────────────────────────────────────

    /// Keep every coin matching all set predicates. Discards any search.
    pub fn apply_filters(&mut self, filter: CoinFilter) {
        self.visible = self
            .all
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        tracing::debug!(
            visible = self.visible.len(),
            total = self.all.len(),
            "Applied coin filters"
        );
        self.view = if filter.is_empty() {
            View::All
        } else {
            View::Filtered(filter)
        };
        self.notify();
    }

    /// Restore the full dataset.
    pub fn clear_filters(&mut self) {
        self.apply_filters(CoinFilter::default());
    }

    /// Keep every coin whose name or symbol contains `query`, ignoring case.
    /// Discards any filters. An empty query restores the full dataset.
    pub fn search(&mut self, query: &str) {
        if query.is_empty() {
            self.visible = self.all.clone();
            self.view = View::All;
        } else {
            self.visible = self
                .all
                .iter()
                .filter(|c| c.matches_query(query))
                .cloned()
                .collect();
            self.view = View::Searched(query.to_string());
        }
        tracing::debug!(
            visible = self.visible.len(),
            total = self.all.len(),
            "Searched coins"
        );
        self.notify();
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn all(&self) -> &[Coin] {
        &self.all
    }

    pub fn visible(&self) -> &[Coin] {
        &self.visible
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Message of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl fmt::Debug for CoinListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinListState")
            .field("all", &self.all.len())
            .field("visible", &self.visible.len())
            .field("view", &self.view)
            .field("has_on_change", &self.on_change.is_some())
            .field("last_issued", &self.last_issued)
            .field("last_applied", &self.last_applied)
            .field("last_error", &self.last_error)
            .finish()
    }
}
