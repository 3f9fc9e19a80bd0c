//! Display formatting shared by every front end

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::fixtures::{ComplianceState, Severity, TrendStatus};
use crate::models::LayerType;

/// Offset of Indian Standard Time from UTC, in seconds
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Palette entries the panels pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Amber,
    Green,
    Yellow,
    Orange,
    Red,
    Slate,
}

/// `23.2599°N` / `77.4126°E` style coordinate
pub fn coordinate(value: f64, is_longitude: bool) -> String {
    let direction = match (is_longitude, value >= 0.0) {
        (true, true) => 'E',
        (true, false) => 'W',
        (false, true) => 'N',
        (false, false) => 'S',
    };
    format!("{:.4}°{}", value.abs(), direction)
}

/// Latitude then longitude, as the status bar shows them
pub fn position(longitude: f64, latitude: f64) -> String {
    format!("{} {}", coordinate(latitude, false), coordinate(longitude, true))
}

/// Six-decimal `lat, lon` pair used by the info overlay
pub fn precise_position(coordinates: [f64; 2]) -> String {
    format!("{:.6}, {:.6}", coordinates[1], coordinates[0])
}

pub fn zoom(zoom: f64) -> String {
    format!("{:.1}x", zoom)
}

/// Opacity in [0, 1] as a whole percentage
pub fn opacity_percent(opacity: f64) -> u32 {
    (opacity * 100.0).round().max(0.0) as u32
}

/// `madhya-pradesh` -> `Madhya Pradesh`
///
/// Only the first hyphen becomes a space; each word is then capitalised.
pub fn state_label(state_id: &str) -> String {
    state_id
        .replacen('-', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `HH:MM IST` for the given instant
pub fn ist_clock(now: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(ist) => format!("{} IST", now.with_timezone(&ist).format("%H:%M")),
        None => format!("{} UTC", now.format("%H:%M")),
    }
}

pub fn layer_icon(layer_type: LayerType) -> &'static str {
    match layer_type {
        LayerType::Satellite => "🛰️",
        LayerType::Terrain => "🗻",
        LayerType::Forest => "🌲",
        LayerType::Settlements => "🏘️",
        LayerType::Boundaries => "📍",
    }
}

pub fn layer_tone(layer_type: LayerType) -> Tone {
    match layer_type {
        LayerType::Satellite => Tone::Blue,
        LayerType::Terrain => Tone::Amber,
        LayerType::Forest => Tone::Green,
        LayerType::Settlements => Tone::Yellow,
        LayerType::Boundaries => Tone::Orange,
    }
}

pub fn trend_tone(status: TrendStatus) -> Tone {
    if status.is_positive() {
        Tone::Green
    } else {
        Tone::Red
    }
}

pub fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::High => Tone::Red,
        Severity::Medium => Tone::Yellow,
        Severity::Low => Tone::Blue,
    }
}

pub fn compliance_tone(state: ComplianceState) -> Tone {
    if state.is_done() {
        Tone::Green
    } else {
        Tone::Yellow
    }
}
