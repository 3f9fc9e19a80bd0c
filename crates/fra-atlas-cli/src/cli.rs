use clap::{Parser, Subcommand};
use fra_atlas_core::models::AnalyticsTab;
use std::path::PathBuf;

/// FRA Atlas - Forest Rights Act monitoring dashboard
#[derive(Parser, Debug)]
#[command(name = "fra-atlas")]
#[command(about = "Forest Rights Act monitoring dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./fra-atlas.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State to focus on start (e.g. tripura)
    #[arg(long, global = true, value_name = "ID")]
    pub state: Option<String>,

    /// Delay before a search stops loading, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub search_delay_ms: Option<u64>,

    /// Number of recent searches to keep
    #[arg(long, global = true, value_name = "N")]
    pub history_capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the status bar, camera and panel state
    Status(StatusArgs),

    /// List states with their key FRA statistics
    States,

    /// Show the data layer panel
    Layers,

    /// Show the analytics panel for the selected state
    Analytics(AnalyticsArgs),

    /// Search locations
    Search(SearchArgs),

    /// Apply a sequence of actions and show the result
    Replay(ReplayArgs),

    /// Interactive prompt that applies actions as you type them
    Shell,

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Also show the search box and any selected location
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct AnalyticsArgs {
    /// Tab to show (insights, predictions, alerts)
    #[arg(long)]
    pub tab: Option<AnalyticsTab>,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// The query text
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Print immediately instead of waiting for loading to finish
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Actions to apply, e.g. "state tripura" "zoom-in" "toggle-layer terrain"
    pub actions: Vec<String>,

    /// Read actions from a file, one per line; '#' starts a comment
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Stop at the first action that fails
    #[arg(long)]
    pub strict: bool,

    /// Do not wait for pending searches before printing
    #[arg(long)]
    pub no_wait: bool,
}
