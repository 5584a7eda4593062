use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tco_compare::config;
use tco_compare::model::build_heatmap;
use tco_compare::render::{self, HeatmapReport};
use tracing::info;

use crate::cli::OutputFormat;

/// Execute the heatmap command
///
/// Sweeps both sliders and prints the difference (A - B) for every pair
pub fn execute(config_path: &Path, format: OutputFormat) -> Result<()> {
    info!(config = %config_path.display(), "Loading configuration");
    let cfg = config::load_config(config_path)?;

    let (a_values, b_values) = cfg.sweep_values()?;
    let vehicle_a = cfg.vehicles.a.profile();
    let vehicle_b = cfg.vehicles.b.profile();
    let grid = build_heatmap(&a_values, &b_values, &vehicle_a, &vehicle_b)?;

    info!(rows = grid.rows(), cols = grid.cols(), "Heatmap built");

    if format == OutputFormat::Json {
        let report = HeatmapReport {
            vehicle_a: &vehicle_a.name,
            vehicle_b: &vehicle_b.name,
            driver_a: vehicle_a.driver,
            driver_b: vehicle_b.driver,
            grid: &grid,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Scenario Matrix: {} vs {} cost difference (A - B, {})",
            vehicle_a.name, vehicle_b.name, cfg.display.currency
        )
        .bold()
    );
    println!(
        "Rows: {} | Columns: {}",
        vehicle_a.driver.label(),
        vehicle_b.driver.label()
    );
    println!(
        "{}",
        render::heatmap_table(&grid, vehicle_a.driver, vehicle_b.driver)
    );

    let counts = grid.winner_counts();
    println!(
        "  {}: {} cheaper in {} scenarios",
        "A".green(),
        vehicle_a.name,
        counts.vehicle_a
    );
    println!(
        "  {}: {} cheaper in {} scenarios",
        "B".red(),
        vehicle_b.name,
        counts.vehicle_b
    );
    if counts.tie > 0 {
        println!("  {}: {} ties", "=".yellow(), counts.tie);
    }
    if let (Some(min), Some(max)) = (grid.min(), grid.max()) {
        println!(
            "  Range: {} .. {} {}",
            render::format_amount(min),
            render::format_amount(max),
            cfg.display.currency
        );
    }

    Ok(())
}
