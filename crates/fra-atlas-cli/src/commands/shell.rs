//! Interactive shell

use crate::output::OutputWriter;
use crate::panels;
use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::Input;
use fra_atlas_core::{Action, Dashboard, Transition};

const HELP: &[(&str, &str)] = &[
    ("zoom-in, zoom-out, reset, toggle-3d", "move the camera"),
    ("view lon=<x> lat=<y> zoom=<z>", "set camera fields"),
    ("state <id>", "focus a state (madhya-pradesh, tripura, odisha, telangana)"),
    ("toggle-layer <id>, opacity <id> <0..1>", "change data layers"),
    ("click, close-info", "inspect the point under the camera"),
    ("menu, analytics, tab <name>", "open and close panels"),
    ("focus, type <text>, search <text>, pick <text>, blur", "use the search box"),
    ("show, layers, states, insights, find", "print a panel"),
    ("quit", "leave the shell"),
];

pub async fn execute(dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        bail!("The shell is interactive and has no JSON output");
    }

    output.info("Type 'help' for the list of actions, 'quit' to leave.");
    panels::status_bar(output, &dashboard.snapshot(), Utc::now());

    loop {
        let line = tokio::task::spawn_blocking(|| {
            Input::<String>::new().with_prompt("atlas").allow_empty(true).interact_text()
        })
        .await??;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                for (usage, purpose) in HELP {
                    output.kv(usage, purpose);
                }
            }
            "show" => panels::overview(output, &dashboard.snapshot(), Utc::now()),
            "layers" => dashboard.read(|state| panels::layer_panel(output, &state.layers)),
            "states" => dashboard.read(|state| panels::state_overview(output, &state.selected_state)),
            "insights" => dashboard.read(|state| {
                panels::analytics_panel(output, &state.selected_state, state.analytics_tab)
            }),
            "find" => panels::search_panel(output, &dashboard.snapshot()),
            input => match input.parse::<Action>().and_then(|action| dashboard.dispatch(action)) {
                Ok(Transition::SearchStarted(request)) => {
                    output.info(format!("Search {} started, type 'find' to see results", request));
                }
                Ok(Transition::Applied) => {
                    panels::status_bar(output, &dashboard.snapshot(), Utc::now());
                }
                Err(err) => output.error(err),
            },
        }
    }

    Ok(())
}
