//! Integration tests for the search completion timer
//!
//! Most tests pause the clock, so the runtime advances time only when every
//! task is idle. Sleeping in the test therefore fires the dashboard's timers
//! first. The concurrency test runs on real time with a short delay.

use fra_atlas_core::models::SearchCompletion;
use fra_atlas_core::{Action, Dashboard, DashboardState};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use tokio::time::sleep;

fn dashboard() -> Dashboard {
    Dashboard::with_state(DashboardState::default(), Duration::from_millis(1000))
}

#[tokio::test(start_paused = true)]
async fn loading_clears_after_delay() {
    let dashboard = dashboard();

    dashboard.search("Kanha National Park").unwrap();
    assert!(dashboard.read(|state| state.search.is_loading));

    sleep(Duration::from_millis(999)).await;
    assert!(dashboard.read(|state| state.search.is_loading));

    sleep(Duration::from_millis(2)).await;
    assert!(!dashboard.read(|state| state.search.is_loading));
}

#[tokio::test(start_paused = true)]
async fn overlapping_searches_only_settle_on_latest() {
    let dashboard = dashboard();

    dashboard.search("x").unwrap();
    sleep(Duration::from_millis(500)).await;
    let latest = dashboard.search("y").unwrap();

    // The first timer would have fired at t=1000
    sleep(Duration::from_millis(600)).await;
    let state = dashboard.snapshot();
    assert!(state.search.is_loading);
    assert_eq!(state.search.query, "y");

    sleep(Duration::from_millis(500)).await;
    let state = dashboard.snapshot();
    assert!(!state.search.is_loading);
    assert_eq!(state.search.latest_request(), Some(latest));
}

#[tokio::test(start_paused = true)]
async fn late_completion_for_old_request_is_discarded() {
    let dashboard = dashboard();

    let old = dashboard.search("x").unwrap();
    let new = dashboard.search("y").unwrap();

    assert_eq!(
        dashboard.finish_search(old),
        SearchCompletion::Stale { completed: old, latest: new }
    );
    assert!(dashboard.read(|state| state.search.is_loading));
}

#[tokio::test(start_paused = true)]
async fn typing_starts_searches_without_history() {
    let dashboard = dashboard();

    for prefix in ["K", "Ka", "Kan"] {
        dashboard.dispatch(Action::InputQuery(prefix.into())).unwrap();
        sleep(Duration::from_millis(100)).await;
    }

    let state = dashboard.settled().await;
    assert_eq!(state.search.query, "Kan");
    assert!(!state.search.is_loading);
    assert_eq!(state.search.history().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_loading_then_idle() {
    let dashboard = dashboard();
    let mut receiver = dashboard.subscribe();

    dashboard.search("Pench").unwrap();
    receiver.changed().await.unwrap();
    assert!(receiver.borrow_and_update().search.is_loading);

    receiver.changed().await.unwrap();
    assert!(!receiver.borrow_and_update().search.is_loading);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_searches_from_clones_always_settle() {
    let handle = tokio::runtime::Handle::current();

    for round in 0..100 {
        let dashboard = Dashboard::with_state(DashboardState::default(), Duration::from_millis(5));
        let barrier = Arc::new(Barrier::new(2));

        let workers: Vec<_> = ["Kanha", "Pench"]
            .into_iter()
            .map(|query| {
                let dashboard = dashboard.clone();
                let barrier = Arc::clone(&barrier);
                let handle = handle.clone();
                thread::spawn(move || {
                    let _runtime = handle.enter();
                    barrier.wait();
                    dashboard.search(query).unwrap();
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let state = tokio::time::timeout(Duration::from_secs(2), dashboard.settled())
            .await
            .unwrap_or_else(|_| panic!("round {round}: search never settled"));
        assert!(!state.search.is_loading);
    }
}
