//! FRA Atlas Core - Dashboard state, fixtures, and configuration
//!
//! This crate contains the headless view-model of the Forest Rights Act atlas:
//! the camera, the data layer registry, the search session, the location
//! selection slot, and the static statistics shown alongside the map.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod models;

pub use dashboard::{Action, Dashboard, DashboardState, Transition};
pub use error::{AtlasError, Result};
