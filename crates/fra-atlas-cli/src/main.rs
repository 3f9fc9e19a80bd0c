//! FRA Atlas CLI - Terminal front end for the atlas dashboard
//!
//! Renders the dashboard panels as text or JSON and drives the dashboard
//! with scripted or interactive actions.

mod cli;
mod commands;
mod errors;
mod output;
mod output_types;
mod panels;
mod progress;
mod settings;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing; stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            errors::from_anyhow(err.into()).display();
            return ExitCode::FAILURE;
        }
    };

    // Execute the command
    match runtime.block_on(commands::execute(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            errors::from_anyhow(err).display();
            ExitCode::FAILURE
        }
    }
}
