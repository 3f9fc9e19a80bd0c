use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{RequestId, SearchCompletion};

use super::{Action, DashboardState, Transition};

/// Single owner of a [`DashboardState`]
///
/// Every successful transition publishes a fresh snapshot to subscribers.
/// Searches complete after the configured delay; starting a new search aborts
/// the previous timer, and a completion that still arrives for an older
/// request is discarded by id.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<DashboardState>,
    search_delay: Duration,
    pending_search: Mutex<Option<(RequestId, JoinHandle<()>)>>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        tracing::info!(
            state = %config.initial_state,
            search_delay_ms = config.search_delay_ms,
            "starting dashboard"
        );
        Self::with_state(
            DashboardState::from_config(config),
            Duration::from_millis(config.search_delay_ms),
        )
    }

    pub fn with_state(state: DashboardState, search_delay: Duration) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            inner: Arc::new(Inner {
                state: sender,
                search_delay,
                pending_search: Mutex::new(None),
            }),
        }
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Apply `action`, scheduling a search completion when one starts
    pub fn dispatch(&self, action: Action) -> Result<Transition> {
        let transition = self.update(|state| state.apply(action))?;
        if let Transition::SearchStarted(id) = transition {
            self.schedule_completion(id);
        }
        Ok(transition)
    }

    /// Submit `query` from the search box
    pub fn search(&self, query: impl Into<String>) -> Result<RequestId> {
        let id = self.update(|state| state.search.submit(query))?;
        self.schedule_completion(id);
        Ok(id)
    }

    /// Run `f` against the state and publish if it succeeded
    pub fn update<T>(&self, f: impl FnOnce(&mut DashboardState) -> Result<T>) -> Result<T> {
        self.modify(|state| {
            let result = f(state);
            let modified = result.is_ok();
            (result, modified)
        })
    }

    /// Completion callback for search `id`
    pub fn finish_search(&self, id: RequestId) -> SearchCompletion {
        self.modify(|state| {
            let completion = state.complete_search(id);
            let modified = matches!(completion, SearchCompletion::Finished(_));
            (completion, modified)
        })
    }

    /// Wait until no search is loading and return that state
    pub async fn settled(&self) -> DashboardState {
        let mut receiver = self.subscribe();
        let settled = receiver
            .wait_for(|state| !state.search.is_loading)
            .await
            .map(|state| DashboardState::clone(&state));
        settled.unwrap_or_else(|_| self.snapshot())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut DashboardState) -> (T, bool)) -> T {
        let mut output = None;
        self.inner.state.send_if_modified(|state| {
            let (value, modified) = f(state);
            output = Some(value);
            modified
        });
        match output {
            Some(value) => value,
            None => unreachable!("send_if_modified runs its closure exactly once"),
        }
    }

    fn schedule_completion(&self, id: RequestId) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(request = %id, "no async runtime; completing search immediately");
            self.finish_search(id);
            return;
        };

        // Held across the spawn so concurrent searches agree on the newest timer
        let mut pending = self
            .inner
            .pending_search
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some((scheduled, _)) = pending.as_ref() {
            if *scheduled > id {
                tracing::debug!(request = %id, newer = %scheduled, "newer search already scheduled");
                return;
            }
        }

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.search_delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                Dashboard { inner }.finish_search(id);
            }
        });

        if let Some((_, previous)) = pending.replace((id, task)) {
            previous.abort();
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("state", &*self.inner.state.borrow())
            .field("search_delay", &self.inner.search_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlasError;

    #[test]
    fn test_failed_transition_publishes_nothing() {
        let dashboard = Dashboard::default();
        let mut receiver = dashboard.subscribe();
        receiver.mark_unchanged();

        let err = dashboard.dispatch(Action::ToggleLayer("rivers".into())).unwrap_err();

        assert!(matches!(err, AtlasError::UnknownLayer { .. }));
        assert!(!receiver.has_changed().unwrap());
        assert_eq!(dashboard.snapshot(), DashboardState::default());
    }

    #[test]
    fn test_successful_transition_notifies_subscribers() {
        let dashboard = Dashboard::default();
        let mut receiver = dashboard.subscribe();
        receiver.mark_unchanged();

        dashboard.dispatch(Action::ZoomIn).unwrap();

        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().view.zoom, 6.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_older_timer_scheduled_last_keeps_newest_timer() {
        let dashboard = Dashboard::with_state(DashboardState::default(), Duration::from_millis(50));
        let first = dashboard.update(|state| Ok(state.search.begin("x"))).unwrap();
        let second = dashboard.update(|state| Ok(state.search.begin("y"))).unwrap();

        // Timers registered in the opposite order their ids were handed out
        dashboard.schedule_completion(second);
        dashboard.schedule_completion(first);

        tokio::time::sleep(Duration::from_millis(60)).await;
        let state = dashboard.snapshot();
        assert!(!state.search.is_loading);
        assert_eq!(state.search.latest_request(), Some(second));
    }

    #[test]
    fn test_search_without_runtime_completes_immediately() {
        let dashboard = Dashboard::default();
        dashboard.search("Kanha").unwrap();
        assert!(!dashboard.read(|state| state.search.is_loading));
    }
}
