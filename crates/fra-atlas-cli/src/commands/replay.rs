//! Replay command implementation

use crate::cli::ReplayArgs;
use crate::output::OutputWriter;
use crate::output_types::{ReplayOutput, ReplayStep};
use crate::panels;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use fra_atlas_core::{Action, Dashboard};
use std::fs;

pub async fn execute(args: ReplayArgs, dashboard: &Dashboard, output: &OutputWriter) -> Result<()> {
    let mut script = Vec::new();
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read actions from {}", path.display()))?;
        script.extend(script_lines(&contents));
    }
    script.extend(args.actions.iter().map(|action| action.trim().to_string()));

    if script.is_empty() {
        bail!("No actions given. Pass them as arguments or with --file");
    }

    let mut steps = Vec::with_capacity(script.len());
    for line in script {
        let result = line.parse::<Action>().and_then(|action| dashboard.dispatch(action));
        match result {
            Ok(transition) => {
                tracing::debug!(action = %line, ?transition, "applied");
                steps.push(ReplayStep { action: line, ok: true, error: None });
            }
            Err(err) if args.strict => {
                return Err(anyhow::Error::new(err).context(format!("Action '{}' failed", line)));
            }
            Err(err) => {
                tracing::warn!(action = %line, error = %err, "action rejected");
                steps.push(ReplayStep { action: line, ok: false, error: Some(err.to_string()) });
            }
        }
    }

    let failed = steps.iter().filter(|step| !step.ok).count();
    if failed > 0 {
        output.warning(format!("{} of {} actions were rejected", failed, steps.len()));
    }

    let state = if args.no_wait { dashboard.snapshot() } else { dashboard.settled().await };

    if output.is_json() {
        return output.result(ReplayOutput { steps, dashboard: state });
    }

    for step in &steps {
        match &step.error {
            None => output.success(&step.action),
            Some(error) => output.error(format!("{}: {}", step.action, error)),
        }
    }
    panels::overview(output, &state, Utc::now());
    Ok(())
}

/// Non-empty lines of an action script with `#` comments removed
fn script_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_lines_skip_comments_and_blanks() {
        let script = "# tour of tripura\nstate tripura\n\n  zoom-in  # closer\ntoggle-layer terrain\n";

        assert_eq!(script_lines(script), vec!["state tripura", "zoom-in", "toggle-layer terrain"]);
    }

    #[test]
    fn test_script_lines_every_line_parses() {
        let script = "state odisha\nopacity forest 0.4\nclick\ntab alerts\n";

        for line in script_lines(script) {
            assert!(line.parse::<Action>().is_ok(), "{line} should parse");
        }
    }
}
