use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tco", version, about = "Vehicle total cost of ownership comparison")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "tco.toml", global = true)]
    pub config: PathBuf,

    /// Log output format (stderr)
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare both vehicles at a single point (default)
    Compare {
        /// Driver value for vehicle A (defaults to config, then sweep middle)
        #[arg(short = 'a', long = "a")]
        variable_a: Option<f64>,

        /// Driver value for vehicle B (defaults to config, then sweep middle)
        #[arg(short = 'b', long = "b")]
        variable_b: Option<f64>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the cost difference grid over both sweeps
    Heatmap {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration, environment overrides applied
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Get the command to execute, defaulting to Compare if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Compare {
            variable_a: None,
            variable_b: None,
            format: OutputFormat::Table,
        })
    }
}
