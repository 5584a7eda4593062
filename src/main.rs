use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use tco_compare::init_tracing;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing(args.log_format == cli::LogFormat::Json);

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Compare {
            variable_a,
            variable_b,
            format,
        } => {
            commands::compare::execute(&args.config, variable_a, variable_b, format)?;
        }
        cli::Commands::Heatmap { format } => {
            commands::heatmap::execute(&args.config, format)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("tco v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
