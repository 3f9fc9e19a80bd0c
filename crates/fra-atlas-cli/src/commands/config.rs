//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::ConfigEntry;
use anyhow::Result;
use fra_atlas_core::config::LayeredConfig;

pub fn execute(layered: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let entries: Vec<ConfigEntry> = layered
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source).to_lowercase(),
        })
        .collect();

    if output.is_json() {
        return output.result(entries);
    }

    output.section("Effective configuration");
    output.table(entries);
    Ok(())
}
