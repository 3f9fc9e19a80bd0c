//! Search command implementation

use crate::cli::SearchArgs;
use crate::output::OutputWriter;
use crate::output_types::SearchOutput;
use crate::panels;
use crate::progress::{create_spinner, finish_success};
use anyhow::Result;
use fra_atlas_core::fixtures;
use fra_atlas_core::Dashboard;

pub async fn execute(args: SearchArgs, dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let query = args.query.join(" ");
    let request = dashboard.search(query.as_str())?;
    tracing::debug!(%request, query = %query, "search submitted");

    let state = if args.no_wait {
        dashboard.snapshot()
    } else if output.is_json() {
        dashboard.settled().await
    } else {
        let spinner = create_spinner(&format!("Searching for '{}'...", query));
        let state = dashboard.settled().await;
        finish_success(&spinner, &format!("Search {} complete", request));
        state
    };

    if output.is_json() {
        return output.result(SearchOutput {
            suggestions: fixtures::suggestions_for(&query),
            history: state.search.history().to_vec(),
            is_loading: state.search.is_loading,
            request,
            query,
        });
    }

    panels::search_panel(output, &state);
    Ok(())
}
