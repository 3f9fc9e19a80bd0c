//! Static display data for the atlas panels
//!
//! Everything here is a hardcoded fixture keyed by state id. None of it is
//! fetched or derived; lookups for states without their own entry fall back
//! to Madhya Pradesh.

use serde::Serialize;

use crate::models::region::StateRecord;

/// State selected when nothing else is configured
pub const DEFAULT_STATE: &str = "madhya-pradesh";

/// States the atlas can focus on, in selector order
pub const STATES: [StateRecord; 4] = [
    StateRecord { id: "madhya-pradesh", name: "Madhya Pradesh", center: [77.4126, 23.2599] },
    StateRecord { id: "tripura", name: "Tripura", center: [91.9882, 23.9408] },
    StateRecord { id: "odisha", name: "Odisha", center: [85.0985, 20.9517] },
    StateRecord { id: "telangana", name: "Telangana", center: [79.0193, 17.1232] },
];

/// Look up a state by id
pub fn find_state(id: &str) -> Option<&'static StateRecord> {
    STATES.iter().find(|state| state.id == id)
}

/// Key FRA figures shown in the state overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub fra_applications: &'static str,
    pub titles_granted: &'static str,
    pub forest_area: &'static str,
    pub tribal_population: &'static str,
}

const MADHYA_PRADESH_STATS: StateStats = StateStats {
    fra_applications: "45,234",
    titles_granted: "38,567",
    forest_area: "77,414 km²",
    tribal_population: "15.3M",
};

/// Statistics for `state_id`, falling back to Madhya Pradesh
pub fn state_stats(state_id: &str) -> StateStats {
    match state_id {
        "tripura" => StateStats {
            fra_applications: "8,456",
            titles_granted: "7,234",
            forest_area: "8,073 km²",
            tribal_population: "1.2M",
        },
        "odisha" => StateStats {
            fra_applications: "52,678",
            titles_granted: "41,234",
            forest_area: "51,619 km²",
            tribal_population: "9.6M",
        },
        "telangana" => StateStats {
            fra_applications: "23,456",
            titles_granted: "19,876",
            forest_area: "27,292 km²",
            tribal_population: "3.2M",
        },
        _ => MADHYA_PRADESH_STATS,
    }
}

/// Direction of an analytics trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Increasing,
    Decreasing,
    Improving,
    Stable,
}

impl TrendStatus {
    pub fn description(&self) -> &'static str {
        match self {
            TrendStatus::Increasing => "Trending upward",
            TrendStatus::Decreasing => "Trending downward",
            TrendStatus::Improving => "Performance improving",
            TrendStatus::Stable => "Stable",
        }
    }

    /// Whether the change is shown as good news
    pub fn is_positive(&self) -> bool {
        matches!(self, TrendStatus::Increasing | TrendStatus::Improving)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub metric: &'static str,
    pub change: &'static str,
    pub status: TrendStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub text: &'static str,

    /// Displayed confidence in percent
    pub confidence: u8,
}

/// Contents of the analytics panel for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub trends: Vec<Trend>,
    pub predictions: Vec<Prediction>,
    pub alerts: Vec<Alert>,
}

const TRENDS: [Trend; 4] = [
    Trend { metric: "FRA Applications", change: "+12%", status: TrendStatus::Increasing },
    Trend { metric: "Title Approvals", change: "+8%", status: TrendStatus::Increasing },
    Trend { metric: "Forest Cover", change: "-2%", status: TrendStatus::Decreasing },
    Trend { metric: "Processing Time", change: "-15%", status: TrendStatus::Improving },
];

const PREDICTIONS: [&str; 3] = [
    "Expected 25% increase in FRA applications over next 6 months",
    "Forest cover stabilization predicted by end of year",
    "Processing efficiency improvement of 20% with current digitization efforts",
];

const ALERTS: [Alert; 3] = [
    Alert {
        severity: Severity::High,
        message: "Unusual deforestation activity detected in Kanha region",
    },
    Alert {
        severity: Severity::Medium,
        message: "45 FRA applications pending beyond statutory timeline",
    },
    Alert {
        severity: Severity::Low,
        message: "Seasonal migration patterns may affect data collection in remote areas",
    },
];

/// Analytics for `state_id`
///
/// Only Madhya Pradesh carries its own figures; every other state shows them
/// as well.
pub fn insights(_state_id: &str) -> Insights {
    Insights {
        trends: TRENDS.to_vec(),
        predictions: PREDICTIONS
            .iter()
            .enumerate()
            .map(|(index, text)| Prediction {
                text: *text,
                confidence: 85 + 3 * index as u8,
            })
            .collect(),
        alerts: ALERTS.to_vec(),
    }
}

/// Display name used by the analytics header; unknown ids read "Unknown State"
pub fn analytics_state_name(state_id: &str) -> &'static str {
    find_state(state_id).map_or("Unknown State", |state| state.name)
}

/// Entry in the search suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: &'static str,
    pub kind: &'static str,
    pub state: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion { name: "Kanha National Park", kind: "Protected Area", state: "Madhya Pradesh" },
    Suggestion { name: "Tribal Settlement Area", kind: "FRA Zone", state: "Odisha" },
    Suggestion { name: "Community Forest Rights", kind: "FRA Implementation", state: "Tripura" },
    Suggestion { name: "Individual Forest Rights", kind: "FRA Implementation", state: "Telangana" },
];

/// Suggestions whose name contains `query`, ignoring case; none for an empty query
pub fn suggestions_for(query: &str) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    SUGGESTIONS
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

pub const QUICK_FILTERS: [&str; 4] =
    ["Forest Rights", "Protected Areas", "Settlements", "Mining Areas"];

/// Outcome of a compliance check in the info overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceState {
    Complete,
    Verified,
    Pending,
}

impl ComplianceState {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceState::Complete => "Complete",
            ComplianceState::Verified => "Verified",
            ComplianceState::Pending => "Pending",
        }
    }

    pub fn is_done(&self) -> bool {
        !matches!(self, ComplianceState::Pending)
    }
}

pub const COMPLIANCE_CHECKS: [(&str, ComplianceState); 3] = [
    ("Documentation", ComplianceState::Complete),
    ("Survey Verification", ComplianceState::Verified),
    ("Environmental Clearance", ComplianceState::Pending),
];
