use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::error::{AtlasError, Result};

/// Number of recent searches kept by default
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Identifier of one search start; strictly increasing within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened when a search timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchCompletion {
    /// The latest request finished and loading was cleared
    Finished(RequestId),

    /// A newer request superseded this one; nothing changed
    Stale { completed: RequestId, latest: RequestId },
}

/// Most-recent-first, de-duplicated list of submitted queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_entries(
            DEFAULT_HISTORY_CAPACITY,
            ["Kanha National Park", "Bandhavgarh Tiger Reserve", "Pench National Park"],
        )
    }
}

impl SearchHistory {
    /// Empty history holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// History seeded with `entries`, most recent first
    pub fn with_entries<I, S>(capacity: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new(capacity);
        let seeded: Vec<String> = entries.into_iter().map(Into::into).collect();
        for entry in seeded.into_iter().rev() {
            history.record(entry);
        }
        history
    }

    /// Move `query` to the front, dropping older duplicates and overflow
    pub fn record(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.entries.retain(|entry| *entry != query);
        self.entries.push_front(query);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Query text, loading flag and history of the search panel
///
/// Every search start is tagged with a fresh [`RequestId`]. Only the
/// completion carrying the latest id clears `is_loading`, so an older timer
/// firing late can never report a newer query as done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    pub query: String,
    pub is_loading: bool,
    pub suggestions_visible: bool,
    latest: Option<RequestId>,
    next_id: u64,
    history: SearchHistory,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::with_history(SearchHistory::default())
    }
}

impl SearchSession {
    pub fn with_history(history: SearchHistory) -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            suggestions_visible: false,
            latest: None,
            next_id: 1,
            history,
        }
    }

    /// Record `query` and mark a new search as in flight
    pub fn begin(&mut self, query: impl Into<String>) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.query = query.into();
        self.is_loading = true;
        self.latest = Some(id);
        tracing::debug!(request = %id, query = %self.query, "search started");
        id
    }

    /// Keystroke path: the query changes and a search starts
    pub fn input(&mut self, query: impl Into<String>) -> RequestId {
        self.begin(query)
    }

    /// Explicit submission: starts a search, records history, hides suggestions
    pub fn submit(&mut self, query: impl Into<String>) -> Result<RequestId> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(AtlasError::EmptyQuery);
        }
        let id = self.begin(query.clone());
        self.history.record(query);
        self.suggestions_visible = false;
        Ok(id)
    }

    /// Suggestion or recent-search entry clicked: searches for it and closes
    /// the list without touching history
    pub fn pick(&mut self, query: impl Into<String>) -> RequestId {
        let id = self.begin(query);
        self.suggestions_visible = false;
        id
    }

    /// Timer callback for request `id`
    pub fn complete(&mut self, id: RequestId) -> SearchCompletion {
        match self.latest {
            Some(latest) if latest == id => {
                self.is_loading = false;
                tracing::debug!(request = %id, "search finished");
                SearchCompletion::Finished(id)
            }
            Some(latest) => {
                tracing::debug!(request = %id, latest = %latest, "discarding stale search completion");
                SearchCompletion::Stale { completed: id, latest }
            }
            None => {
                tracing::warn!(request = %id, "completion for a search that never started");
                SearchCompletion::Stale { completed: id, latest: id }
            }
        }
    }

    pub fn focus(&mut self) {
        self.suggestions_visible = true;
    }

    pub fn blur(&mut self) {
        self.suggestions_visible = false;
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }
}
