use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tco_compare::breakdown::breakdown;
use tco_compare::config;
use tco_compare::model::{compare, Winner};
use tco_compare::render::{self, CompareReport};
use tracing::info;

use crate::cli::OutputFormat;

/// Execute the compare command
///
/// Evaluates a single scenario and prints totals plus both breakdowns
pub fn execute(
    config_path: &Path,
    variable_a: Option<f64>,
    variable_b: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    info!(config = %config_path.display(), "Loading configuration");
    let cfg = config::load_config(config_path)?;

    let input = cfg.scenario_input(variable_a, variable_b)?;
    let result = compare(&input)?;
    let breakdown_a = breakdown(
        &input.vehicle_a,
        cfg.vehicles.a.itemised(),
        input.variable_a_value,
        input.horizon_years,
    )?;
    let breakdown_b = breakdown(
        &input.vehicle_b,
        cfg.vehicles.b.itemised(),
        input.variable_b_value,
        input.horizon_years,
    )?;

    info!(
        variable_a = input.variable_a_value,
        variable_b = input.variable_b_value,
        difference = result.difference,
        "Scenario compared"
    );

    if format == OutputFormat::Json {
        let report = CompareReport {
            input: &input,
            result: &result,
            winner: result.winner(),
            breakdown_a: &breakdown_a,
            breakdown_b: &breakdown_b,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let currency = &cfg.display.currency;
    println!(
        "{}",
        format!("{}-Year Ownership Cost Comparison", input.horizon_years).bold()
    );
    println!("{}", render::comparison_table(&input, &result, currency));

    let verdict = render::verdict(&result, &input.vehicle_a.name, &input.vehicle_b.name, currency);
    match result.winner() {
        Winner::VehicleA => println!("{}", verdict.green().bold()),
        Winner::VehicleB => println!("{}", verdict.red().bold()),
        Winner::Tie => println!("{}", verdict.yellow().bold()),
    }
    println!();

    for b in [&breakdown_a, &breakdown_b] {
        println!("{}", format!("{} Costs", b.vehicle).cyan().bold());
        println!("{}", render::breakdown_table(b, currency));
        println!();
    }

    Ok(())
}
