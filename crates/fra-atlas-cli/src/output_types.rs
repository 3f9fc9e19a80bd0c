use fra_atlas_core::fixtures::{Insights, StateStats, Suggestion};
use fra_atlas_core::models::{AnalyticsTab, LayerConfig, RequestId, StateSummary};
use fra_atlas_core::DashboardState;
use serde::Serialize;
use tabled::Tabled;

/// Output for status command
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub position: String,
    pub zoom: String,
    pub loading: bool,
    pub state_label: String,
    pub clock: String,
    pub dashboard: DashboardState,
}

/// Output for states command
#[derive(Debug, Serialize)]
pub struct StateOverviewItem {
    #[serde(flatten)]
    pub state: StateSummary,
    pub selected: bool,
    pub stats: StateStats,
}

/// Table row for the state overview
#[derive(Debug, Tabled)]
pub struct StateRow {
    #[tabled(rename = "")]
    pub marker: &'static str,
    #[tabled(rename = "State")]
    pub name: String,
    #[tabled(rename = "Centre")]
    pub center: String,
    #[tabled(rename = "Applications")]
    pub applications: &'static str,
    #[tabled(rename = "Titles Granted")]
    pub titles: &'static str,
    #[tabled(rename = "Forest Area")]
    pub forest_area: &'static str,
    #[tabled(rename = "Tribal Pop.")]
    pub tribal_population: &'static str,
}

/// Output for layers command
#[derive(Debug, Serialize)]
pub struct LayersOutput {
    pub layers: Vec<LayerConfig>,
    pub visible: Vec<String>,
}

/// Table row for the layer panel
#[derive(Debug, Tabled)]
pub struct LayerRow {
    #[tabled(rename = "")]
    pub icon: &'static str,
    #[tabled(rename = "Layer")]
    pub name: String,
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Visible")]
    pub visible: &'static str,
    #[tabled(rename = "Opacity")]
    pub opacity: String,
}

/// Output for analytics command
#[derive(Debug, Serialize)]
pub struct AnalyticsOutput {
    pub state: String,
    pub tab: AnalyticsTab,
    pub insights: Insights,
}

/// Output for search command
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub request: RequestId,
    pub is_loading: bool,
    pub suggestions: Vec<Suggestion>,
    pub history: Vec<String>,
}

/// Output for replay command
#[derive(Debug, Serialize)]
pub struct ReplayOutput {
    pub steps: Vec<ReplayStep>,
    pub dashboard: DashboardState,
}

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub action: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Table row for the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
