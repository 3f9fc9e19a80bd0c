use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::{AtlasError, Result};
use crate::fixtures::{self, Insights, StateStats, Suggestion};
use crate::models::view_state::{LOCATION_ZOOM, STATE_ZOOM};
use crate::models::{
    AnalyticsTab, LayerRegistry, LocationInfo, PanelVisibility, RequestId, SearchCompletion,
    SearchHistory, SearchSession, StateRecord, ViewState, ViewStatePatch,
};

use super::Action;

/// Result of a successful transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    /// State changed synchronously; nothing else to do
    Applied,

    /// A search started and needs a completion scheduled for this request
    SearchStarted(RequestId),
}

/// Everything the dashboard shows
///
/// Failed transitions return an error and leave the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub view: ViewState,
    pub selected_state: String,
    pub layers: LayerRegistry,
    pub selection: Option<LocationInfo>,
    pub panels: PanelVisibility,
    pub search: SearchSession,
    pub analytics_tab: AnalyticsTab,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            selected_state: fixtures::DEFAULT_STATE.to_string(),
            layers: LayerRegistry::default(),
            selection: None,
            panels: PanelVisibility::default(),
            search: SearchSession::default(),
            analytics_tab: AnalyticsTab::default(),
        }
    }
}

impl DashboardState {
    /// Initial state for a resolved configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        let defaults = SearchHistory::default();
        let history = SearchHistory::with_entries(config.history_capacity, defaults.entries());

        Self {
            selected_state: config.initial_state.clone(),
            panels: PanelVisibility {
                sidebar_open: config.sidebar_open,
                analytics_open: config.analytics_open,
            },
            search: SearchSession::with_history(history),
            ..Self::default()
        }
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        tracing::debug!(%action, "applying action");

        match action {
            Action::SetView(patch) => self.set_view(patch),
            Action::ZoomIn => self.view.zoom_in(),
            Action::ZoomOut => self.view.zoom_out(),
            Action::ResetView => self.reset_view()?,
            Action::Toggle3d => self.view.toggle_3d(),
            Action::ChangeState(id) => self.change_state(&id)?,
            Action::ToggleLayer(id) => {
                self.toggle_layer(&id)?;
            }
            Action::SetOpacity { layer, opacity } => self.set_layer_opacity(&layer, opacity)?,
            Action::SelectLocation => {
                self.select_location();
            }
            Action::ClearSelection => self.clear_selection(),
            Action::ToggleSidebar => {
                self.panels.toggle_sidebar();
            }
            Action::CloseSidebar => self.panels.close_sidebar(),
            Action::ToggleAnalytics => {
                self.panels.toggle_analytics();
            }
            Action::CloseAnalytics => self.panels.close_analytics(),
            Action::SelectTab(tab) => self.analytics_tab = tab,
            Action::FocusSearch => self.search.focus(),
            Action::BlurSearch => self.search.blur(),
            Action::InputQuery(query) => {
                return Ok(Transition::SearchStarted(self.search.input(query)));
            }
            Action::SubmitQuery(query) => {
                return Ok(Transition::SearchStarted(self.search.submit(query)?));
            }
            Action::PickSuggestion(query) => {
                return Ok(Transition::SearchStarted(self.search.pick(query)));
            }
        }

        Ok(Transition::Applied)
    }

    pub fn set_view(&mut self, patch: ViewStatePatch) {
        self.view.apply(patch);
    }

    /// Record for the currently selected state
    pub fn selected_record(&self) -> Result<&'static StateRecord> {
        fixtures::find_state(&self.selected_state).ok_or_else(|| AtlasError::UnknownState {
            id: self.selected_state.clone(),
        })
    }

    /// Centre on the selected state at state zoom, flat and north-up
    pub fn reset_view(&mut self) -> Result<()> {
        let record = self.selected_record()?;
        self.view = ViewState::centered(record.center, STATE_ZOOM);
        Ok(())
    }

    /// Focus another state; pitch and bearing are kept
    pub fn change_state(&mut self, id: &str) -> Result<()> {
        let record = fixtures::find_state(id).ok_or_else(|| {
            tracing::warn!(state = id, "ignoring unknown state");
            AtlasError::UnknownState { id: id.to_string() }
        })?;

        self.selected_state = record.id.to_string();
        self.view.recenter(record.center, STATE_ZOOM);
        Ok(())
    }

    pub fn toggle_layer(&mut self, id: &str) -> Result<bool> {
        self.layers.toggle(id)
    }

    pub fn set_layer_opacity(&mut self, id: &str, opacity: f64) -> Result<()> {
        self.layers.set_opacity(id, opacity)
    }

    /// Handle a map click
    ///
    /// The reported location is always the camera centre, not the pointer
    /// position. The camera then zooms in on it.
    pub fn select_location(&mut self) -> &LocationInfo {
        let center = self.view.center();
        self.view.recenter(center, LOCATION_ZOOM);
        self.selection.insert(LocationInfo::sample_at(center))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Completion of search `id`; stale ids are ignored
    pub fn complete_search(&mut self, id: RequestId) -> SearchCompletion {
        self.search.complete(id)
    }

    pub fn stats(&self) -> StateStats {
        fixtures::state_stats(&self.selected_state)
    }

    pub fn insights(&self) -> Insights {
        fixtures::insights(&self.selected_state)
    }

    /// Suggestions currently on screen
    pub fn visible_suggestions(&self) -> Vec<Suggestion> {
        if self.search.suggestions_visible {
            fixtures::suggestions_for(&self.search.query)
        } else {
            Vec::new()
        }
    }
}
