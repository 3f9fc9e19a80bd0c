use serde::{Deserialize, Serialize};

/// Lowest zoom level the camera accepts
pub const MIN_ZOOM: f64 = 1.0;

/// Highest zoom level the camera accepts
pub const MAX_ZOOM: f64 = 20.0;

/// Pitch applied when the 3D view is switched on
pub const PITCH_3D: f64 = 60.0;

/// Zoom used when the camera jumps to a state
pub const STATE_ZOOM: f64 = 7.0;

/// Zoom used when the camera centres on a selected location
pub const LOCATION_ZOOM: f64 = 12.0;

/// Virtual camera describing what the map currently shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Camera centre longitude in degrees
    pub longitude: f64,

    /// Camera centre latitude in degrees
    pub latitude: f64,

    /// Zoom level, kept within [`MIN_ZOOM`, `MAX_ZOOM`]
    pub zoom: f64,

    /// Tilt in degrees; either 0 or [`PITCH_3D`]
    pub pitch: f64,

    /// Rotation in degrees
    pub bearing: f64,
}

impl Default for ViewState {
    /// India-wide overview
    fn default() -> Self {
        Self {
            longitude: 77.1025,
            latitude: 22.9734,
            zoom: 5.0,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

impl ViewState {
    /// Camera centred on `center` at `zoom`, flat and north-up
    pub fn centered(center: [f64; 2], zoom: f64) -> Self {
        Self {
            longitude: center[0],
            latitude: center[1],
            zoom: clamp_zoom(zoom),
            pitch: 0.0,
            bearing: 0.0,
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Step one zoom level closer, saturating at [`MAX_ZOOM`]
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + 1.0);
    }

    /// Step one zoom level out, saturating at [`MIN_ZOOM`]
    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - 1.0);
    }

    /// Flip pitch between flat and [`PITCH_3D`]
    pub fn toggle_3d(&mut self) {
        self.pitch = if self.pitch == 0.0 { PITCH_3D } else { 0.0 };
    }

    pub fn is_3d(&self) -> bool {
        self.pitch > 0.0
    }

    /// Move the centre and zoom, leaving pitch and bearing as they are
    pub fn recenter(&mut self, center: [f64; 2], zoom: f64) {
        self.longitude = center[0];
        self.latitude = center[1];
        self.zoom = clamp_zoom(zoom);
    }

    pub fn center(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Overwrite the fields present in `patch`
    ///
    /// Zoom is clamped and any positive pitch snaps to [`PITCH_3D`], so the
    /// camera never leaves its two tilt positions.
    pub fn apply(&mut self, patch: ViewStatePatch) {
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(zoom) = patch.zoom {
            self.zoom = clamp_zoom(zoom);
        }
        if let Some(pitch) = patch.pitch {
            self.pitch = if pitch > 0.0 { PITCH_3D } else { 0.0 };
        }
        if let Some(bearing) = patch.bearing {
            self.bearing = bearing;
        }
    }
}

/// Partial camera update; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewStatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
}

impl ViewStatePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Clamp a zoom level into [`MIN_ZOOM`, `MAX_ZOOM`]; NaN maps to [`MIN_ZOOM`]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        MIN_ZOOM
    } else {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}
