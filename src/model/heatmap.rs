use serde::Serialize;
use tracing::debug;

use crate::error::CostError;
use crate::model::calculator::compute_total_cost;
use crate::model::types::{VehicleProfile, Winner, HORIZON_YEARS};

/// Matrix of cost differences (a - b)
///
/// Row `i` corresponds to `variable_a_values[i]`, column `j` to
/// `variable_b_values[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    variable_a_values: Vec<f64>,
    variable_b_values: Vec<f64>,
    cells: Vec<Vec<f64>>,
}

/// How many grid cells favour each vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinnerCounts {
    pub vehicle_a: usize,
    pub vehicle_b: usize,
    pub tie: usize,
}

impl HeatmapGrid {
    pub fn rows(&self) -> usize {
        self.variable_a_values.len()
    }

    pub fn cols(&self) -> usize {
        self.variable_b_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn variable_a_values(&self) -> &[f64] {
        &self.variable_a_values
    }

    pub fn variable_b_values(&self) -> &[f64] {
        &self.variable_b_values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterate `(row, col, difference)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &d)| (i, j, d)))
    }

    pub fn min(&self) -> Option<f64> {
        self.iter().map(|(_, _, d)| d).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.iter().map(|(_, _, d)| d).reduce(f64::max)
    }

    pub fn winner_counts(&self) -> WinnerCounts {
        let mut counts = WinnerCounts::default();
        for (_, _, difference) in self.iter() {
            match Winner::from_difference(difference) {
                Winner::VehicleA => counts.vehicle_a += 1,
                Winner::VehicleB => counts.vehicle_b += 1,
                Winner::Tie => counts.tie += 1,
            }
        }
        counts
    }
}

/// Evaluate the difference for every pair in `variable_a_range × variable_b_range`
///
/// Each vehicle's total depends only on its own driver value, so totals are
/// computed once per row and once per column; every cell is then the same
/// subtraction `compare` performs.
pub fn build_heatmap(
    variable_a_range: &[f64],
    variable_b_range: &[f64],
    vehicle_a: &VehicleProfile,
    vehicle_b: &VehicleProfile,
) -> Result<HeatmapGrid, CostError> {
    let totals_a = variable_a_range
        .iter()
        .map(|&v| compute_total_cost(vehicle_a, v, HORIZON_YEARS))
        .collect::<Result<Vec<_>, _>>()?;
    let totals_b = variable_b_range
        .iter()
        .map(|&v| compute_total_cost(vehicle_b, v, HORIZON_YEARS))
        .collect::<Result<Vec<_>, _>>()?;

    let cells = totals_a
        .iter()
        .map(|ta| totals_b.iter().map(|tb| ta - tb).collect())
        .collect();

    debug!(
        rows = totals_a.len(),
        cols = totals_b.len(),
        "Heatmap grid computed"
    );

    Ok(HeatmapGrid {
        variable_a_values: variable_a_range.to_vec(),
        variable_b_values: variable_b_range.to_vec(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calculator::compare;
    use crate::model::types::{CostDriver, ScenarioInput};

    fn profiles() -> (VehicleProfile, VehicleProfile) {
        (
            VehicleProfile::new("A", 45_000.0, 1_200.0, CostDriver::DepreciationRate),
            VehicleProfile::new("B", 70_000.0, 1_800.0, CostDriver::AnnualRepairCost),
        )
    }

    #[test]
    fn test_grid_dimensions_follow_ranges() {
        let (a, b) = profiles();
        let grid = build_heatmap(&[0.1, 0.2, 0.3], &[1_000.0, 2_000.0], &a, &b).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 2).is_none());
    }

    #[test]
    fn test_cells_match_compare() {
        let (a, b) = profiles();
        let a_range = [0.0, 0.15, 0.5, 1.0];
        let b_range = [0.0, 2_000.0, 7_500.0];
        let grid = build_heatmap(&a_range, &b_range, &a, &b).unwrap();

        for (i, &va) in a_range.iter().enumerate() {
            for (j, &vb) in b_range.iter().enumerate() {
                let expected = compare(&ScenarioInput::new(a.clone(), b.clone(), va, vb))
                    .unwrap()
                    .difference;
                assert_eq!(grid.get(i, j), Some(expected));
            }
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let (a, b) = profiles();
        let grid = build_heatmap(&[0.15], &[2_000.0], &a, &b).unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        let expected = compare(&ScenarioInput::new(a, b, 0.15, 2_000.0)).unwrap();
        assert_eq!(grid.get(0, 0), Some(expected.difference));
    }

    #[test]
    fn test_empty_range_gives_empty_grid() {
        let (a, b) = profiles();
        let grid = build_heatmap(&[], &[2_000.0], &a, &b).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.min(), None);
        assert_eq!(grid.winner_counts(), WinnerCounts::default());
    }

    #[test]
    fn test_out_of_range_value_fails_whole_grid() {
        let (a, b) = profiles();
        let result = build_heatmap(&[0.1, 1.2], &[2_000.0], &a, &b);
        assert!(matches!(result, Err(CostError::InvalidParameter(_))));
    }

    #[test]
    fn test_min_max_and_winner_counts() {
        let a = VehicleProfile::new("A", 0.0, 0.0, CostDriver::DepreciationAmount);
        let b = VehicleProfile::new("B", 0.0, 0.0, CostDriver::DepreciationAmount);
        let grid = build_heatmap(&[10.0, 20.0], &[10.0, 30.0], &a, &b).unwrap();

        assert_eq!(grid.min(), Some(-20.0));
        assert_eq!(grid.max(), Some(10.0));
        assert_eq!(
            grid.winner_counts(),
            WinnerCounts {
                vehicle_a: 2,
                vehicle_b: 1,
                tie: 1,
            }
        );
        assert_eq!(grid.row(1), Some(&[10.0, -10.0][..]));
    }
}
