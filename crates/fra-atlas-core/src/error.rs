//! Error types for FRA Atlas

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    // Lookup errors
    #[error("Unknown state: {id}")]
    UnknownState { id: String },

    #[error("Unknown layer: {id}")]
    UnknownLayer { id: String },

    #[error("Invalid opacity {value} for layer {id}: expected a value between 0 and 1")]
    InvalidOpacity { id: String, value: f64 },

    // Search errors
    #[error("Search query is empty")]
    EmptyQuery,

    // Action parsing errors
    #[error("Invalid action '{input}': {reason}")]
    InvalidAction { input: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl AtlasError {
    /// Build an `InvalidAction` error from the raw input and a reason
    pub fn invalid_action(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;
