use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tco_compare::config::{self, VehicleConfig};
use tco_compare::render::format_amount;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration with environment overrides applied
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file and prints what the sweeps will cover
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;
    let (a_values, b_values) = cfg.sweep_values()?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    print_vehicle("A", &cfg.vehicles.a, &cfg.display.currency);
    print_vehicle("B", &cfg.vehicles.b, &cfg.display.currency);
    println!(
        "  {}: {} x {} = {} scenarios",
        "Grid".cyan(),
        a_values.len(),
        b_values.len(),
        a_values.len() * b_values.len()
    );

    info!("Configuration validation successful");
    Ok(())
}

fn print_vehicle(slot: &str, vehicle: &VehicleConfig, currency: &str) {
    println!("  {} {}: {}", "Vehicle".cyan(), slot, vehicle.name);
    println!("    Driver: {}", vehicle.driver.label());
    println!(
        "    Annual fixed costs: {} {} ({} items)",
        format_amount(vehicle.annual_fixed_costs()),
        currency,
        vehicle.annual_costs.len()
    );
    println!(
        "    One-time costs: {} {} ({} items)",
        format_amount(vehicle.one_time_total()),
        currency,
        vehicle.one_time_costs.len()
    );
}
