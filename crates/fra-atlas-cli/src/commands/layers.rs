//! Layers command implementation

use crate::output::OutputWriter;
use crate::output_types::LayersOutput;
use crate::panels;
use anyhow::Result;
use fra_atlas_core::Dashboard;

pub fn execute(dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let layers = dashboard.read(|state| state.layers.clone());

    if output.is_json() {
        return output.result(LayersOutput {
            visible: layers.visible().map(|layer| layer.id.clone()).collect(),
            layers: layers.iter().cloned().collect(),
        });
    }

    panels::layer_panel(output, &layers);
    Ok(())
}
