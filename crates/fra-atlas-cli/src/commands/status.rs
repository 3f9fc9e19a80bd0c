//! Status command implementation

use crate::cli::StatusArgs;
use crate::output::OutputWriter;
use crate::output_types::StatusOutput;
use crate::panels;
use anyhow::Result;
use chrono::Utc;
use fra_atlas_core::format;
use fra_atlas_core::Dashboard;

pub fn execute(args: StatusArgs, dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let state = dashboard.snapshot();
    let now = Utc::now();

    if output.is_json() {
        return output.result(StatusOutput {
            position: format::position(state.view.longitude, state.view.latitude),
            zoom: format::zoom(state.view.zoom),
            loading: state.search.is_loading,
            state_label: format::state_label(&state.selected_state),
            clock: format::ist_clock(now),
            dashboard: state,
        });
    }

    panels::status_bar(output, &state, now);
    panels::camera(output, &state);
    panels::panels(output, &state);

    if args.verbose {
        panels::search_panel(output, &state);
        if let Some(info) = &state.selection {
            panels::info_overlay(output, info);
        }
    }

    Ok(())
}
