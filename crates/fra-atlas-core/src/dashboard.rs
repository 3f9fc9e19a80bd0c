//! Dashboard state container and its async controller
//!
//! [`DashboardState`] holds every piece of view state and exposes pure
//! transitions. [`Dashboard`] owns one state behind a watch channel, hands
//! snapshots to subscribers, and runs the search completion timer.

pub mod action;
pub mod controller;
pub mod state;

pub use action::Action;
pub use controller::Dashboard;
pub use state::{DashboardState, Transition};
