use std::fmt;
use std::str::FromStr;

use crate::error::{AtlasError, Result};
use crate::models::{AnalyticsTab, ViewStatePatch};

/// A user interaction with the dashboard
///
/// Actions also have a short text form, one per line in replay scripts:
///
/// ```text
/// zoom-in
/// state tripura
/// toggle-layer settlements
/// opacity forest 0.4
/// view lon=80.5 lat=21 zoom=9
/// search Kanha National Park
/// pick Bandhavgarh Tiger Reserve
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetView(ViewStatePatch),
    ZoomIn,
    ZoomOut,
    ResetView,
    Toggle3d,
    ChangeState(String),
    ToggleLayer(String),
    SetOpacity { layer: String, opacity: f64 },
    SelectLocation,
    ClearSelection,
    ToggleSidebar,
    CloseSidebar,
    ToggleAnalytics,
    CloseAnalytics,
    SelectTab(AnalyticsTab),
    FocusSearch,
    BlurSearch,
    /// Query text changed (keystroke)
    InputQuery(String),
    /// Query submitted
    SubmitQuery(String),
    /// Suggestion or recent search clicked
    PickSuggestion(String),
}

impl FromStr for Action {
    type Err = AtlasError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        let action = match verb.to_lowercase().as_str() {
            "zoom-in" => Action::ZoomIn,
            "zoom-out" => Action::ZoomOut,
            "reset" | "reset-view" => Action::ResetView,
            "toggle-3d" | "3d" => Action::Toggle3d,
            "view" => Action::SetView(parse_patch(input, rest)?),
            "state" => Action::ChangeState(required(input, rest, "state id")?),
            "toggle-layer" | "layer" => Action::ToggleLayer(required(input, rest, "layer id")?),
            "opacity" => {
                let (layer, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    AtlasError::invalid_action(input, "expected: opacity <layer> <value>")
                })?;
                let opacity = value.trim().parse::<f64>().map_err(|_| {
                    AtlasError::invalid_action(input, format!("'{}' is not a number", value.trim()))
                })?;
                Action::SetOpacity { layer: layer.to_string(), opacity }
            }
            "click" | "select" => Action::SelectLocation,
            "close-info" | "clear" => Action::ClearSelection,
            "toggle-sidebar" | "menu" => Action::ToggleSidebar,
            "close-sidebar" => Action::CloseSidebar,
            "toggle-analytics" | "analytics" => Action::ToggleAnalytics,
            "close-analytics" => Action::CloseAnalytics,
            "tab" => Action::SelectTab(required(input, rest, "tab name")?.parse()?),
            "focus" => Action::FocusSearch,
            "blur" => Action::BlurSearch,
            "type" => Action::InputQuery(rest.to_string()),
            "search" => Action::SubmitQuery(required(input, rest, "query")?),
            "pick" => Action::PickSuggestion(required(input, rest, "suggestion")?),
            "" => return Err(AtlasError::invalid_action(input, "empty action")),
            other => {
                return Err(AtlasError::invalid_action(input, format!("unknown action '{}'", other)))
            }
        };

        Ok(action)
    }
}

fn required(input: &str, rest: &str, what: &str) -> Result<String> {
    if rest.is_empty() {
        Err(AtlasError::invalid_action(input, format!("missing {}", what)))
    } else {
        Ok(rest.to_string())
    }
}

/// Parse `key=value` pairs into a camera patch
fn parse_patch(input: &str, rest: &str) -> Result<ViewStatePatch> {
    let mut patch = ViewStatePatch::default();

    for pair in rest.split_whitespace() {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AtlasError::invalid_action(input, format!("expected key=value, got '{}'", pair)))?;
        let value = value
            .parse::<f64>()
            .map_err(|_| AtlasError::invalid_action(input, format!("'{}' is not a number", value)))?;

        match key {
            "lon" | "longitude" => patch.longitude = Some(value),
            "lat" | "latitude" => patch.latitude = Some(value),
            "zoom" => patch.zoom = Some(value),
            "pitch" => patch.pitch = Some(value),
            "bearing" => patch.bearing = Some(value),
            other => {
                return Err(AtlasError::invalid_action(input, format!("unknown view field '{}'", other)))
            }
        }
    }

    if patch.is_empty() {
        return Err(AtlasError::invalid_action(input, "view needs at least one field"));
    }
    Ok(patch)
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetView(patch) => {
                write!(f, "view")?;
                let fields = [
                    ("lon", patch.longitude),
                    ("lat", patch.latitude),
                    ("zoom", patch.zoom),
                    ("pitch", patch.pitch),
                    ("bearing", patch.bearing),
                ];
                for (key, value) in fields {
                    if let Some(value) = value {
                        write!(f, " {}={}", key, value)?;
                    }
                }
                Ok(())
            }
            Action::ZoomIn => write!(f, "zoom-in"),
            Action::ZoomOut => write!(f, "zoom-out"),
            Action::ResetView => write!(f, "reset"),
            Action::Toggle3d => write!(f, "toggle-3d"),
            Action::ChangeState(id) => write!(f, "state {}", id),
            Action::ToggleLayer(id) => write!(f, "toggle-layer {}", id),
            Action::SetOpacity { layer, opacity } => write!(f, "opacity {} {}", layer, opacity),
            Action::SelectLocation => write!(f, "click"),
            Action::ClearSelection => write!(f, "close-info"),
            Action::ToggleSidebar => write!(f, "toggle-sidebar"),
            Action::CloseSidebar => write!(f, "close-sidebar"),
            Action::ToggleAnalytics => write!(f, "toggle-analytics"),
            Action::CloseAnalytics => write!(f, "close-analytics"),
            Action::SelectTab(tab) => write!(f, "tab {}", tab.label().to_lowercase()),
            Action::FocusSearch => write!(f, "focus"),
            Action::BlurSearch => write!(f, "blur"),
            Action::InputQuery(query) => write!(f, "type {}", query),
            Action::SubmitQuery(query) => write!(f, "search {}", query),
            Action::PickSuggestion(query) => write!(f, "pick {}", query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!("zoom-in".parse::<Action>().unwrap(), Action::ZoomIn);
        assert_eq!("  RESET ".parse::<Action>().unwrap(), Action::ResetView);
        assert_eq!(
            "state tripura".parse::<Action>().unwrap(),
            Action::ChangeState("tripura".into())
        );
        assert_eq!(
            "tab predictions".parse::<Action>().unwrap(),
            Action::SelectTab(AnalyticsTab::Predictions)
        );
    }

    #[test]
    fn test_parse_query_keeps_spaces() {
        assert_eq!(
            "search Kanha National Park".parse::<Action>().unwrap(),
            Action::SubmitQuery("Kanha National Park".into())
        );
        assert_eq!("type".parse::<Action>().unwrap(), Action::InputQuery(String::new()));
        assert_eq!(
            "pick Tribal Settlement Area".parse::<Action>().unwrap(),
            Action::PickSuggestion("Tribal Settlement Area".into())
        );
        assert!("pick".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_opacity() {
        assert_eq!(
            "opacity forest 0.4".parse::<Action>().unwrap(),
            Action::SetOpacity { layer: "forest".into(), opacity: 0.4 }
        );
        assert!("opacity forest".parse::<Action>().is_err());
        assert!("opacity forest high".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_view_patch() {
        let action = "view lon=80.5 zoom=9".parse::<Action>().unwrap();
        assert_eq!(
            action,
            Action::SetView(ViewStatePatch {
                longitude: Some(80.5),
                zoom: Some(9.0),
                ..Default::default()
            })
        );
        assert!("view".parse::<Action>().is_err());
        assert!("view height=3".parse::<Action>().is_err());
    }

    #[test]
    fn test_unknown_action_is_reported() {
        let err = "fly-to delhi".parse::<Action>().unwrap_err();
        assert!(err.to_string().contains("unknown action 'fly-to'"));
        assert!("".parse::<Action>().is_err());
        assert!("state".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let actions = [
            Action::ZoomOut,
            Action::ChangeState("odisha".into()),
            Action::SetOpacity { layer: "terrain".into(), opacity: 0.25 },
            Action::SelectTab(AnalyticsTab::Alerts),
            Action::SubmitQuery("Pench National Park".into()),
            Action::PickSuggestion("Community Forest Rights".into()),
        ];
        for action in actions {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }
}
