use serde::{Deserialize, Serialize};

/// Details shown in the info overlay for a selected point on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub name: String,

    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],

    /// Elevation in metres
    pub elevation: f64,

    /// Free-text claim status
    pub fra_status: String,

    /// Forest cover percentage; not clamped
    pub forest_cover: f64,

    pub settlements: u32,
}

impl LocationInfo {
    /// Mock payload reported for a map click at `[longitude, latitude]`
    pub fn sample_at(coordinates: [f64; 2]) -> Self {
        Self {
            name: "Sample Forest Area".to_string(),
            coordinates,
            elevation: 450.0,
            fra_status: "Community Forest Rights Granted".to_string(),
            forest_cover: 85.6,
            settlements: 3,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}
