//! Terminal rendering of comparison results

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::breakdown::Breakdown;
use crate::model::{CostDriver, HeatmapGrid, ScenarioInput, ScenarioResult, Winner};

/// Compact amount: `12345` -> `12k`, `-2500` -> `-2k`, `950` -> `950`
pub fn format_k(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Whole currency units with thousands separators: `20964.4` -> `20,964`
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Driver value as shown on a slider: rates as percentages, amounts compact
pub fn format_driver_value(driver: CostDriver, value: f64) -> String {
    if driver.is_amount() {
        format_k(value)
    } else {
        format!("{:.1}%", value * 100.0)
    }
}

/// Human sentence for a difference computed as `a - b`
pub fn verdict(result: &ScenarioResult, name_a: &str, name_b: &str, currency: &str) -> String {
    let amount = format_amount(result.difference.abs());
    match result.winner() {
        Winner::VehicleA => format!("{} is cheaper by {} {}", name_a, amount, currency),
        Winner::VehicleB => format!("{} is cheaper by {} {}", name_b, amount, currency),
        Winner::Tie => "Both vehicles cost the same".to_string(),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn winner_color(difference: f64) -> Color {
    match Winner::from_difference(difference) {
        Winner::VehicleA => Color::Green,
        Winner::VehicleB => Color::Red,
        Winner::Tie => Color::Yellow,
    }
}

/// Side-by-side totals for a single scenario
pub fn comparison_table(input: &ScenarioInput, result: &ScenarioResult, currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Vehicle", "Driver", "Value", "Total"]);

    for (profile, value, total) in [
        (&input.vehicle_a, input.variable_a_value, result.total_cost_a),
        (&input.vehicle_b, input.variable_b_value, result.total_cost_b),
    ] {
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(profile.driver.label()),
            Cell::new(format_driver_value(profile.driver, value))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{} {}", format_amount(total), currency))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Difference (A - B)"),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{} {}", format_amount(result.difference), currency))
            .fg(winner_color(result.difference))
            .set_alignment(CellAlignment::Right),
    ]);

    table
}

/// Line items with their share of the total
pub fn breakdown_table(breakdown: &Breakdown, currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Cost Category", "Amount", "Share"]);

    table.add_row(vec![
        Cell::new("Purchase price"),
        Cell::new(format!("{} {}", format_amount(breakdown.purchase_price), currency))
            .set_alignment(CellAlignment::Right),
        Cell::new("N/A").set_alignment(CellAlignment::Right),
    ]);

    for item in &breakdown.items {
        table.add_row(vec![
            Cell::new(&item.label),
            Cell::new(format!("{} {}", format_amount(item.amount), currency))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", item.share * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(format!("{} {}", format_amount(breakdown.total), currency))
            .set_alignment(CellAlignment::Right),
        Cell::new("100%").set_alignment(CellAlignment::Right),
    ]);

    table
}

/// Grid of differences; rows follow vehicle A's values, columns vehicle B's
pub fn heatmap_table(grid: &HeatmapGrid, driver_a: CostDriver, driver_b: CostDriver) -> Table {
    let mut table = new_table();

    let mut header = vec![Cell::new("A \\ B")];
    header.extend(
        grid.variable_b_values()
            .iter()
            .map(|&v| Cell::new(format_driver_value(driver_b, v))),
    );
    table.set_header(header);

    for (i, &a_value) in grid.variable_a_values().iter().enumerate() {
        let mut row = vec![Cell::new(format_driver_value(driver_a, a_value))];
        if let Some(cells) = grid.row(i) {
            row.extend(cells.iter().map(|&d| {
                Cell::new(format_k(d))
                    .fg(winner_color(d))
                    .set_alignment(CellAlignment::Right)
            }));
        }
        table.add_row(row);
    }

    table
}

/// JSON payload for `compare --format json`
#[derive(Debug, Serialize)]
pub struct CompareReport<'a> {
    pub input: &'a ScenarioInput,
    pub result: &'a ScenarioResult,
    pub winner: Winner,
    pub breakdown_a: &'a Breakdown,
    pub breakdown_b: &'a Breakdown,
}

/// JSON payload for `heatmap --format json`
#[derive(Debug, Serialize)]
pub struct HeatmapReport<'a> {
    pub vehicle_a: &'a str,
    pub vehicle_b: &'a str,
    pub driver_a: CostDriver,
    pub driver_b: CostDriver,
    pub grid: &'a HeatmapGrid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_heatmap, VehicleProfile};

    #[test]
    fn test_format_k() {
        assert_eq!(format_k(12_345.0), "12k");
        assert_eq!(format_k(-2_400.0), "-2k");
        assert_eq!(format_k(950.0), "950");
        assert_eq!(format_k(0.0), "0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20_964.375), "20,964");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(-9_564.4), "-9,564");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.2), "0");
    }

    #[test]
    fn test_format_driver_value() {
        assert_eq!(format_driver_value(CostDriver::DepreciationRate, 0.15), "15.0%");
        assert_eq!(format_driver_value(CostDriver::AnnualRepairCost, 20_000.0), "20k");
    }

    #[test]
    fn test_verdict() {
        let result = ScenarioResult {
            total_cost_a: 20_000.0,
            total_cost_b: 11_400.0,
            difference: 8_600.0,
        };
        assert_eq!(verdict(&result, "Tesla", "Jaguar", "kr"), "Jaguar is cheaper by 8,600 kr");
    }

    #[test]
    fn test_heatmap_table_layout() {
        let a = VehicleProfile::new("A", 0.0, 0.0, CostDriver::DepreciationAmount);
        let b = VehicleProfile::new("B", 0.0, 0.0, CostDriver::AnnualRepairCost);
        let grid = build_heatmap(&[90_000.0, 120_000.0], &[20_000.0, 40_000.0], &a, &b).unwrap();

        let rendered = heatmap_table(&grid, a.driver, b.driver).to_string();
        assert!(rendered.contains("A \\ B"));
        assert!(rendered.contains("90k"));
        assert!(rendered.contains("-30k"));
        assert_eq!(heatmap_table(&grid, a.driver, b.driver).row_iter().count(), 2);
    }
}
