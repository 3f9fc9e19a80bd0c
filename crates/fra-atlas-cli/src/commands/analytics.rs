//! Analytics command implementation

use crate::cli::AnalyticsArgs;
use crate::output::OutputWriter;
use crate::output_types::AnalyticsOutput;
use crate::panels;
use anyhow::Result;
use fra_atlas_core::fixtures;
use fra_atlas_core::Dashboard;

pub fn execute(args: AnalyticsArgs, dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let (state_id, current_tab) =
        dashboard.read(|state| (state.selected_state.clone(), state.analytics_tab));
    let tab = args.tab.unwrap_or(current_tab);

    if output.is_json() {
        return output.result(AnalyticsOutput {
            state: fixtures::analytics_state_name(&state_id).to_string(),
            tab,
            insights: fixtures::insights(&state_id),
        });
    }

    panels::analytics_panel(output, &state_id, tab);
    Ok(())
}
