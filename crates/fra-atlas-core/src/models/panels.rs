use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AtlasError, Result};

/// Open/closed flags for the side panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelVisibility {
    pub sidebar_open: bool,
    pub analytics_open: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            analytics_open: false,
        }
    }
}

impl PanelVisibility {
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_analytics(&mut self) -> bool {
        self.analytics_open = !self.analytics_open;
        self.analytics_open
    }

    pub fn close_analytics(&mut self) {
        self.analytics_open = false;
    }
}

/// Tab shown in the analytics panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsTab {
    #[default]
    Insights,
    Predictions,
    Alerts,
}

impl AnalyticsTab {
    pub const ALL: [AnalyticsTab; 3] =
        [AnalyticsTab::Insights, AnalyticsTab::Predictions, AnalyticsTab::Alerts];

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsTab::Insights => "Insights",
            AnalyticsTab::Predictions => "Predictions",
            AnalyticsTab::Alerts => "Alerts",
        }
    }
}

impl fmt::Display for AnalyticsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalyticsTab {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "insights" => Ok(AnalyticsTab::Insights),
            "predictions" => Ok(AnalyticsTab::Predictions),
            "alerts" => Ok(AnalyticsTab::Alerts),
            _ => Err(AtlasError::invalid_action(
                s,
                "expected insights, predictions, or alerts",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panels() {
        let panels = PanelVisibility::default();
        assert!(panels.sidebar_open);
        assert!(!panels.analytics_open);
    }

    #[test]
    fn test_toggles() {
        let mut panels = PanelVisibility::default();
        assert!(!panels.toggle_sidebar());
        assert!(panels.toggle_analytics());
        panels.close_analytics();
        assert!(!panels.analytics_open);
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("ALERTS".parse::<AnalyticsTab>().unwrap(), AnalyticsTab::Alerts);
        assert!("charts".parse::<AnalyticsTab>().is_err());
    }
}
