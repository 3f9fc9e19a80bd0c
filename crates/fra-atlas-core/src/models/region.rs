use serde::{Deserialize, Serialize};

/// Identifier of an Indian state, e.g. `madhya-pradesh`
pub type StateId = &'static str;

/// A state the atlas can focus on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateRecord {
    pub id: StateId,
    pub name: &'static str,

    /// `[longitude, latitude]`
    pub center: [f64; 2],
}

/// Owned form used when a record crosses a serialization boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub id: String,
    pub name: String,
    pub center: [f64; 2],
}

impl From<&StateRecord> for StateSummary {
    fn from(record: &StateRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.to_string(),
            center: record.center,
        }
    }
}
