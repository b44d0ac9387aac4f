//! `CoinList` — coin list state bound to an injected data source.

use super::source::CoinDataSource;
use super::state::{CoinListState, FetchOutcome, View};
use super::{Coin, CoinFilter};

/// The coin list a screen works with.
///
/// Owns one [`CoinListState`] per screen session. The source is injected at
/// construction; nothing is persisted. `fetch` takes `&mut self`, so fetches
/// through one `CoinList` never overlap. Callers driving the source on their
/// own task use the ticket API on [`state_mut`](Self::state_mut) instead.
pub struct CoinList<S> {
    source: S,
    state: CoinListState,
}

impl<S: CoinDataSource> CoinList<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CoinListState::new(),
        }
    }

    /// Fetch the full dataset and absorb it.
    ///
    /// On success the dataset and view are replaced (any filter or search is
    /// reset) and the change callback fires once. On failure nothing changes.
    pub async fn fetch(&mut self) -> FetchOutcome {
        let ticket = self.state.begin_fetch();
        tracing::debug!(ticket = ticket.generation(), "Fetching coins");
        let result = self.source.fetch_coins().await;
        self.state.complete_fetch(ticket, result)
    }

    pub fn apply_filters(&mut self, filter: CoinFilter) {
        self.state.apply_filters(filter);
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
    }

    pub fn search(&mut self, query: &str) {
        self.state.search(query);
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&mut self, callback: impl FnMut() + Send + 'static) {
        self.state.on_change(callback);
    }

    pub fn visible(&self) -> &[Coin] {
        self.state.visible()
    }

    pub fn all(&self) -> &[Coin] {
        self.state.all()
    }

    pub fn view(&self) -> &View {
        self.state.view()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &CoinListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CoinListState {
        &mut self.state
    }
}
