//! Text renderings of the dashboard panels

use crate::output::{paint, OutputWriter};
use crate::output_types::{LayerRow, StateRow};
use chrono::{DateTime, Utc};
use console::style;
use fra_atlas_core::fixtures::{self, COMPLIANCE_CHECKS, QUICK_FILTERS, STATES};
use fra_atlas_core::format::{self, Tone};
use fra_atlas_core::models::{AnalyticsTab, LayerRegistry, LocationInfo};
use fra_atlas_core::DashboardState;

pub fn status_bar(output: &OutputWriter, state: &DashboardState, now: DateTime<Utc>) {
    let view = &state.view;
    let connection = if state.search.is_loading {
        paint("Loading...", Tone::Yellow)
    } else {
        paint("Connected", Tone::Green)
    };

    output.section("Status");
    output.kv("Position", format::position(view.longitude, view.latitude));
    output.kv("Zoom", format::zoom(view.zoom));
    output.kv("Connection", connection);
    output.kv("State", format::state_label(&state.selected_state));
    output.kv("Time", format::ist_clock(now));
    output.kv("Data", paint("Real-time", Tone::Green));
}

pub fn camera(output: &OutputWriter, state: &DashboardState) {
    let view = &state.view;
    let controls = [
        ("zoom-in", view.can_zoom_in()),
        ("zoom-out", view.can_zoom_out()),
    ]
    .iter()
    .map(|(name, enabled)| {
        if *enabled {
            name.to_string()
        } else {
            style(format!("{} (disabled)", name)).dim().to_string()
        }
    })
    .collect::<Vec<_>>()
    .join(", ");

    output.section("Camera");
    output.kv("Lat", format!("{:.4}", view.latitude));
    output.kv("Lng", format!("{:.4}", view.longitude));
    output.kv("Zoom", format!("{:.1}", view.zoom));
    output.kv("3D", if view.is_3d() { "on" } else { "off" });
    output.kv("Bearing", format!("{}°", view.bearing));
    output.kv("Controls", controls);
}

pub fn panels(output: &OutputWriter, state: &DashboardState) {
    let open = |flag: bool| if flag { "open" } else { "closed" };

    output.section("Panels");
    output.kv("Sidebar", open(state.panels.sidebar_open));
    output.kv("Analytics", open(state.panels.analytics_open));
    output.kv("Analytics tab", state.analytics_tab);
}

pub fn layer_panel(output: &OutputWriter, layers: &LayerRegistry) {
    output.section("Data Layers");
    let rows = layers
        .iter()
        .map(|layer| LayerRow {
            icon: format::layer_icon(layer.layer_type),
            name: paint(&layer.name, format::layer_tone(layer.layer_type)).to_string(),
            id: layer.id.clone(),
            visible: if layer.visible { "yes" } else { "no" },
            opacity: if layer.visible {
                format!("{}%", format::opacity_percent(layer.opacity))
            } else {
                "-".to_string()
            },
        })
        .collect();
    output.table::<LayerRow>(rows);
}

pub fn state_overview(output: &OutputWriter, selected: &str) {
    output.section("State Overview");
    let rows = STATES
        .iter()
        .map(|state| {
            let stats = fixtures::state_stats(state.id);
            StateRow {
                marker: if state.id == selected { "▶" } else { "" },
                name: state.name.to_string(),
                center: format!("Lat: {:.4}, Lng: {:.4}", state.center[1], state.center[0]),
                applications: stats.fra_applications,
                titles: stats.titles_granted,
                forest_area: stats.forest_area,
                tribal_population: stats.tribal_population,
            }
        })
        .collect();
    output.table::<StateRow>(rows);
}

pub fn analytics_panel(output: &OutputWriter, state_id: &str, tab: AnalyticsTab) {
    let insights = fixtures::insights(state_id);

    output.section(format!("AI Analytics: {}", fixtures::analytics_state_name(state_id)));
    output.line(style("Last updated: 2 hours ago").dim());

    let tabs = AnalyticsTab::ALL
        .iter()
        .map(|t| {
            if *t == tab {
                style(format!("[{}]", t)).bold().to_string()
            } else {
                format!(" {} ", t)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    output.line(tabs);

    match tab {
        AnalyticsTab::Insights => {
            output.section("Key Trends");
            for trend in &insights.trends {
                output.line(format!(
                    "  {:<18} {:>5}  {}",
                    trend.metric,
                    paint(trend.change, format::trend_tone(trend.status)),
                    style(trend.status.description()).dim()
                ));
            }
        }
        AnalyticsTab::Predictions => {
            output.section("AI Predictions");
            for prediction in &insights.predictions {
                output.line(format!(
                    "  {} {}",
                    prediction.text,
                    style(format!("(confidence {}%)", prediction.confidence)).dim()
                ));
            }
        }
        AnalyticsTab::Alerts => {
            output.section("Active Alerts");
            for alert in &insights.alerts {
                output.line(format!(
                    "  {:<7} {}",
                    paint(alert.severity.label(), format::severity_tone(alert.severity)),
                    alert.message
                ));
            }
        }
    }
}

pub fn info_overlay(output: &OutputWriter, info: &LocationInfo) {
    output.section(&info.name);
    output.kv("Coordinates", format::precise_position(info.coordinates));
    output.kv("Elevation", format!("{}m", info.elevation));
    output.kv("FRA Status", paint(&info.fra_status, Tone::Green));
    output.kv("Forest Cover", paint(format!("{}%", info.forest_cover), Tone::Green));
    output.kv("Settlements", info.settlements);
    for (check, outcome) in COMPLIANCE_CHECKS {
        output.kv(check, paint(outcome.label(), format::compliance_tone(outcome)));
    }
}

pub fn search_panel(output: &OutputWriter, state: &DashboardState) {
    let search = &state.search;

    output.section("Search Locations");
    output.kv("Query", if search.query.is_empty() { "(empty)" } else { search.query.as_str() });
    output.kv("Loading", search.is_loading);

    let suggestions = fixtures::suggestions_for(&search.query);
    if !suggestions.is_empty() {
        output.line(style("Suggestions").bold());
        for item in suggestions {
            output.line(format!("  {} {}", item.name, style(format!("{} • {}", item.kind, item.state)).dim()));
        }
    }

    if !search.history().is_empty() {
        output.line(style("Recent Searches").bold());
        for entry in search.history().entries() {
            output.line(format!("  {}", entry));
        }
    }

    output.kv("Quick Filters", QUICK_FILTERS.join(", "));
}

/// Everything visible on screen: status bar, camera, panels and any open overlay
pub fn overview(output: &OutputWriter, state: &DashboardState, now: DateTime<Utc>) {
    status_bar(output, state, now);
    camera(output, state);
    panels(output, state);
    if state.panels.sidebar_open {
        layer_panel(output, &state.layers);
    }
    if state.panels.analytics_open {
        analytics_panel(output, &state.selected_state, state.analytics_tab);
    }
    if let Some(info) = &state.selection {
        info_overlay(output, info);
    }
}
