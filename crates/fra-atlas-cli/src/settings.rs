//! Configuration loading for CLI commands

use crate::cli::Cli;
use anyhow::Result;
use fra_atlas_core::config::{CliConfigOverrides, DashboardConfig, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "fra-atlas.toml";

/// Merge defaults, file, environment and flags
pub fn load_layered(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path(cli.config.as_deref()) {
        tracing::debug!(path = %path.display(), "loading config file");
        config = config.load_from_file(&path)?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        initial_state: cli.state.clone(),
        search_delay_ms: cli.search_delay_ms,
        history_capacity: cli.history_capacity,
        ..Default::default()
    });

    Ok(config)
}

/// Layered configuration validated into dashboard settings
pub fn load(cli: &Cli) -> Result<(LayeredConfig, DashboardConfig)> {
    let layered = load_layered(cli)?;
    let resolved = layered.resolve()?;
    Ok((layered, resolved))
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        }
    }
}
