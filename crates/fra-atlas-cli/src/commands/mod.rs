//! Command implementations

mod analytics;
mod config;
mod layers;
mod replay;
mod search;
mod shell;
mod states;
mod status;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use crate::settings;
use anyhow::Result;
use fra_atlas_core::Dashboard;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let (layered, config) = settings::load(&cli)?;
    let dashboard = Dashboard::new(&config);

    match cli.command {
        Commands::Status(args) => status::execute(args, &dashboard, &output),
        Commands::States => states::execute(&dashboard, &output),
        Commands::Layers => layers::execute(&dashboard, &output),
        Commands::Analytics(args) => analytics::execute(args, &dashboard, &output),
        Commands::Search(args) => search::execute(args, &dashboard, &output).await,
        Commands::Replay(args) => replay::execute(args, &dashboard, &output).await,
        Commands::Shell => shell::execute(&dashboard, &output).await,
        Commands::Config => config::execute(&layered, &output),
    }
}
