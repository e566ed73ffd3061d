//! Pure catalog filter state machine.
//!
//! Widgets write into the *committed* filter. The search text reaches the
//! *effective* filter only after a quiet period; the category reaches it
//! immediately. The effective filter drives fetches and is mirrored into
//! the URL. Every input returns the [`Effect`]s the host must run.

use super::query::{strip_query_prefix, FilterQuery};
use std::time::Duration;

/// Quiet period after the last keystroke before the search text settles.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Identifies one issued fetch. Only the latest ticket may publish results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Identifies one debounce timer. Only the latest token may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the quiet-period timer, replacing any running one, then
    /// call [`FilterMachine::debounce_elapsed`] with `token`.
    ScheduleDebounce { token: DebounceToken, delay: Duration },
    /// Replace the current navigation entry's query string (no leading `?`).
    ReplaceUrl(String),
    /// Load results for `query` and report them through
    /// [`FilterMachine::fetch_finished`].
    Fetch { ticket: FetchTicket, query: FilterQuery },
}

/// What the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterView<T> {
    pub committed: FilterQuery,
    pub effective: Option<FilterQuery>,
    pub results: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FilterView<T> {
    fn default() -> Self {
        Self {
            committed: FilterQuery::default(),
            effective: None,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterMachine<T> {
    committed: FilterQuery,
    /// `None` until the URL has been observed once
    effective: Option<FilterQuery>,
    initialized: bool,
    /// Query string this machine last wrote (or hydrated from)
    last_written: String,
    /// Query string currently in the location bar, as far as we know
    current_url: String,
    debounce: u64,
    debounce_pending: bool,
    delay: Duration,
    latest_ticket: u64,
    unmounted: bool,
    results: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for FilterMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FilterMachine<T> {
    pub fn new() -> Self {
        Self::with_debounce(DEBOUNCE)
    }

    pub fn with_debounce(delay: Duration) -> Self {
        Self {
            committed: FilterQuery::default(),
            effective: None,
            initialized: false,
            last_written: String::new(),
            current_url: String::new(),
            debounce: 0,
            debounce_pending: false,
            delay,
            latest_ticket: 0,
            unmounted: false,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Feeds the location's query string, on mount and after every
    /// navigation.
    ///
    /// The first observation always hydrates. Later ones hydrate only when
    /// the query differs from what this machine last wrote, so its own
    /// writes echo back as no-ops. Hydration settles the effective filter
    /// at once and drops any pending debounce. The URL is only written when
    /// it carries untrimmed values, so it always matches the effective
    /// filter.
    pub fn observe_url(&mut self, query: &str) -> Vec<Effect> {
        if self.unmounted {
            return Vec::new();
        }
        let query = strip_query_prefix(query);
        self.current_url = query.to_string();
        if self.initialized && query == self.last_written {
            return Vec::new();
        }
        if self.initialized {
            tracing::debug!(query, "catalog URL changed externally");
        }

        self.initialized = true;
        self.last_written = query.to_string();
        self.committed = FilterQuery::from_query_string(query);
        self.cancel_debounce();
        let next = self.committed.normalized();
        let mut effects = Vec::new();
        // Padded values are rewritten to the trimmed form the filter uses
        if self.committed != next {
            if let Some(query) = self.commit_url(&next) {
                effects.push(Effect::ReplaceUrl(query));
            }
        }
        effects.extend(self.settle(next, false));
        effects
    }

    /// Keystroke in the search box. Only restarts the quiet period.
    pub fn edit_search_text(&mut self, text: impl Into<String>) -> Vec<Effect> {
        if self.unmounted {
            return Vec::new();
        }
        self.committed.search_text = text.into();
        self.debounce += 1;
        self.debounce_pending = true;
        vec![Effect::ScheduleDebounce { token: DebounceToken(self.debounce), delay: self.delay }]
    }

    /// Category selector change. Takes effect immediately and leaves a
    /// pending search debounce running.
    pub fn select_category(&mut self, category_id: impl Into<String>) -> Vec<Effect> {
        if self.unmounted {
            return Vec::new();
        }
        self.committed.category_id = category_id.into();
        if !self.initialized {
            return Vec::new();
        }
        let search_text = self.effective.as_ref().map(|q| q.search_text.clone()).unwrap_or_default();
        let next = FilterQuery::new(search_text, self.committed.category_id.trim());
        self.settle(next, true)
    }

    /// The timer for `token` fired. Stale tokens are ignored.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Vec<Effect> {
        if self.unmounted || !self.debounce_pending || token.0 != self.debounce {
            return Vec::new();
        }
        self.debounce_pending = false;
        if !self.initialized {
            return Vec::new();
        }
        let next = self.committed.normalized();
        self.settle(next, true)
    }

    /// Reports a finished fetch. Returns `false` when the result was
    /// discarded because a newer effective filter exists or the view is
    /// gone.
    ///
    /// A failure for the current filter clears the results and sets the
    /// error message.
    pub fn fetch_finished(&mut self, ticket: FetchTicket, outcome: Result<Vec<T>, String>) -> bool {
        if self.unmounted || ticket.0 != self.latest_ticket {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "discarding stale fetch");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.results = items;
                self.error = None;
            },
            Err(message) => {
                self.results.clear();
                self.error = Some(message);
            },
        }
        true
    }

    /// The view went away: every later timer or fetch is stale.
    pub fn unmount(&mut self) {
        self.unmounted = true;
        self.cancel_debounce();
        self.loading = false;
    }

    fn cancel_debounce(&mut self) {
        self.debounce += 1;
        self.debounce_pending = false;
    }

    fn settle(&mut self, next: FilterQuery, write_url: bool) -> Vec<Effect> {
        if self.effective.as_ref() == Some(&next) {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(2);
        if write_url {
            if let Some(query) = self.commit_url(&next) {
                effects.push(Effect::ReplaceUrl(query));
            }
        }
        self.effective = Some(next.clone());
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        effects.push(Effect::Fetch { ticket: FetchTicket(self.latest_ticket), query: next });
        effects
    }

    fn commit_url(&mut self, next: &FilterQuery) -> Option<String> {
        let serialized = next.merge_into(&self.current_url);
        if serialized == self.current_url {
            return None;
        }
        self.current_url.clone_from(&serialized);
        self.last_written.clone_from(&serialized);
        Some(serialized)
    }

    pub fn committed(&self) -> &FilterQuery {
        &self.committed
    }

    pub fn effective(&self) -> Option<&FilterQuery> {
        self.effective.as_ref()
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce_pending
    }

    pub fn last_written(&self) -> &str {
        &self.last_written
    }
}

impl<T: Clone> FilterMachine<T> {
    pub fn view(&self) -> FilterView<T> {
        FilterView {
            committed: self.committed.clone(),
            effective: self.effective.clone(),
            results: self.results.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
