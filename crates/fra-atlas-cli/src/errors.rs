use console::style;
use fra_atlas_core::fixtures::STATES;
use fra_atlas_core::AtlasError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn known_states() -> String {
    STATES.iter().map(|state| state.id).collect::<Vec<_>>().join(", ")
}

/// Create error for an unknown state id
pub fn unknown_state(id: &str) -> CliError {
    CliError::new(format!("Unknown state: {}", id))
        .with_context(format!("The atlas covers these states:\n\n  {}", known_states()))
        .with_suggestion("List states with their statistics: fra-atlas states")
        .with_suggestion("Pick one with: --state tripura")
        .with_help("Run: fra-atlas --help")
}

/// Create error for an unknown layer id
pub fn unknown_layer(id: &str) -> CliError {
    CliError::new(format!("Unknown layer: {}", id))
        .with_context("Layers are: satellite, forest, boundaries, settlements, terrain")
        .with_suggestion("Show the layer panel: fra-atlas layers")
        .with_help("Run: fra-atlas replay --help")
}

/// Create error for an action that could not be parsed
pub fn invalid_action(input: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid action: {}", input))
        .with_context(format!("Reason: {}", reason))
        .with_suggestion("Actions look like: zoom-in, state tripura, opacity forest 0.4")
        .with_suggestion("Type 'help' inside 'fra-atlas shell' for the full list")
        .with_help("Run: fra-atlas replay --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check fra-atlas.toml for syntax errors")
        .with_suggestion("Inspect where each value comes from: fra-atlas config")
        .with_help("Run: fra-atlas --help")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(atlas) = error.downcast_ref::<AtlasError>() {
        let mut cli_error = from_atlas(atlas);
        let chain = format!("{:#}", error);
        if chain != atlas.to_string() {
            cli_error.context = Some(match cli_error.context.take() {
                Some(details) => format!("{}\n\n{}", chain, details),
                None => chain,
            });
        }
        return cli_error;
    }

    let message = format!("{:#}", error);
    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {:#}", error))
            .with_suggestion("Check the file path and try again")
    } else {
        CliError::new(format!("{:#}", error))
    }
}

/// Map a core error to a CliError with remediation
pub fn from_atlas(error: &AtlasError) -> CliError {
    match error {
        AtlasError::UnknownState { id } => unknown_state(id),
        AtlasError::UnknownLayer { id } => unknown_layer(id),
        AtlasError::InvalidAction { input, reason } => invalid_action(input, reason),
        AtlasError::ConfigInvalid { key, reason } => invalid_config(key, reason),
        AtlasError::InvalidOpacity { .. } => CliError::new(error.to_string())
            .with_suggestion("Use a value between 0 and 1, e.g. opacity forest 0.4"),
        AtlasError::EmptyQuery => CliError::new(error.to_string())
            .with_suggestion("Pass some text: fra-atlas search Kanha"),
    }
}
