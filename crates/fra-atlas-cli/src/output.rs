use console::{style, Color, StyledObject};
use fra_atlas_core::format::Tone;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "status": "success",
                    "message": message.to_string(),
                }));
            }
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => {}
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                eprint_json(&serde_json::json!({
                    "status": "warning",
                    "message": message.to_string(),
                }));
            }
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("✗").red().bold(), message);
            }
            OutputFormat::Json => {
                eprint_json(&serde_json::json!({
                    "status": "error",
                    "message": message.to_string(),
                }));
            }
        }
    }

    /// Rounded table in human mode; nothing in JSON mode, where commands
    /// emit a single `result` instead
    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if let OutputFormat::Human = self.format {
            if data.is_empty() {
                println!("{}", style("(no data)").dim());
            } else {
                let mut table = Table::new(data);
                table.with(Style::rounded());
                println!("{}", table);
            }
        }
    }

    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "success",
                    "data": data,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Plain line of human output
    pub fn line(&self, text: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("{}", text);
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Style `text` with the colour of a palette entry
pub fn paint<D: Display>(text: D, tone: Tone) -> StyledObject<D> {
    let color = match tone {
        Tone::Blue => Color::Blue,
        Tone::Amber => Color::Color256(214),
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Orange => Color::Color256(208),
        Tone::Red => Color::Red,
        Tone::Slate => Color::Color256(245),
    };
    style(text).fg(color)
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));
}

fn eprint_json(value: &serde_json::Value) {
    eprintln!("{}", serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));
}
