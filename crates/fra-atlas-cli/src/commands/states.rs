//! States command implementation

use crate::output::OutputWriter;
use crate::output_types::StateOverviewItem;
use crate::panels;
use anyhow::Result;
use fra_atlas_core::fixtures::{self, STATES};
use fra_atlas_core::Dashboard;

pub fn execute(dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let selected = dashboard.read(|state| state.selected_state.clone());

    if output.is_json() {
        let items: Vec<StateOverviewItem> = STATES
            .iter()
            .map(|record| StateOverviewItem {
                state: record.into(),
                selected: record.id == selected,
                stats: fixtures::state_stats(record.id),
            })
            .collect();
        return output.result(items);
    }

    panels::state_overview(output, &selected);
    Ok(())
}
