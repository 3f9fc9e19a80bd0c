use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AtlasError, Result};

/// Kind of visual overlay a layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Satellite,
    Terrain,
    Forest,
    Settlements,
    Boundaries,
}

impl LayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Satellite => "satellite",
            LayerType::Terrain => "terrain",
            LayerType::Forest => "forest",
            LayerType::Settlements => "settlements",
            LayerType::Boundaries => "boundaries",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "satellite" => Ok(LayerType::Satellite),
            "terrain" => Ok(LayerType::Terrain),
            "forest" => Ok(LayerType::Forest),
            "settlements" => Ok(LayerType::Settlements),
            "boundaries" => Ok(LayerType::Boundaries),
            _ => Err(AtlasError::UnknownLayer { id: s.to_string() }),
        }
    }
}

/// Togglable data overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Unique identifier within the registry
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(rename = "type")]
    pub layer_type: LayerType,

    pub visible: bool,

    /// Opacity in [0, 1]
    pub opacity: f64,
}

impl LayerConfig {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        layer_type: LayerType,
        visible: bool,
        opacity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer_type,
            visible,
            opacity,
        }
    }
}

/// Ordered set of layers; list order is render order, later entries on top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerRegistry {
    layers: Vec<LayerConfig>,
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self {
            layers: vec![
                LayerConfig::new("satellite", "Satellite Imagery", LayerType::Satellite, true, 1.0),
                LayerConfig::new("forest", "Forest Cover", LayerType::Forest, true, 0.7),
                LayerConfig::new("boundaries", "FRA Boundaries", LayerType::Boundaries, true, 0.8),
                LayerConfig::new("settlements", "Settlements", LayerType::Settlements, false, 0.6),
                LayerConfig::new("terrain", "Terrain", LayerType::Terrain, false, 0.5),
            ],
        }
    }
}

impl LayerRegistry {
    pub fn get(&self, id: &str) -> Option<&LayerConfig> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut LayerConfig> {
        self.layers
            .iter_mut()
            .find(|layer| layer.id == id)
            .ok_or_else(|| AtlasError::UnknownLayer { id: id.to_string() })
    }

    /// Flip visibility of `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let layer = self.get_mut(id)?;
        layer.visible = !layer.visible;
        Ok(layer.visible)
    }

    /// Overwrite the opacity of `id`
    ///
    /// Rejects non-finite values and anything outside [0, 1] without touching
    /// the registry.
    pub fn set_opacity(&mut self, id: &str, opacity: f64) -> Result<()> {
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            // Resolve the id first so an unknown layer is reported as such
            self.get_mut(id)?;
            return Err(AtlasError::InvalidOpacity {
                id: id.to_string(),
                value: opacity,
            });
        }
        self.get_mut(id)?.opacity = opacity;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter()
    }

    /// Visible layers in render order
    pub fn visible(&self) -> impl Iterator<Item = &LayerConfig> {
        self.layers.iter().filter(|layer| layer.visible)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layers_in_render_order() {
        let registry = LayerRegistry::default();
        let ids: Vec<&str> = registry.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["satellite", "forest", "boundaries", "settlements", "terrain"]);

        let visible: Vec<&str> = registry.visible().map(|l| l.id.as_str()).collect();
        assert_eq!(visible, ["satellite", "forest", "boundaries"]);
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut registry = LayerRegistry::default();
        assert!(registry.toggle("settlements").unwrap());
        assert!(!registry.toggle("settlements").unwrap());
        assert_eq!(registry, LayerRegistry::default());
    }

    #[test]
    fn test_unknown_layer_leaves_registry_unchanged() {
        let mut registry = LayerRegistry::default();
        assert!(matches!(
            registry.toggle("rivers"),
            Err(AtlasError::UnknownLayer { ref id }) if id == "rivers"
        ));
        assert!(matches!(registry.set_opacity("rivers", 0.5), Err(AtlasError::UnknownLayer { .. })));
        assert_eq!(registry, LayerRegistry::default());
    }

    #[test]
    fn test_set_opacity() {
        let mut registry = LayerRegistry::default();
        registry.set_opacity("forest", 0.3).unwrap();
        assert_eq!(registry.get("forest").unwrap().opacity, 0.3);

        assert!(matches!(
            registry.set_opacity("forest", 1.5),
            Err(AtlasError::InvalidOpacity { .. })
        ));
        assert!(registry.set_opacity("forest", f64::NAN).is_err());
        assert_eq!(registry.get("forest").unwrap().opacity, 0.3);
    }

    #[test]
    fn test_parse_layer_type() {
        assert_eq!("Forest".parse::<LayerType>().unwrap(), LayerType::Forest);
        assert!("water".parse::<LayerType>().is_err());
    }
}
