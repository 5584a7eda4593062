use serde::{Deserialize, Serialize};

/// Ownership horizon used by every comparison
pub const HORIZON_YEARS: u32 = 3;

/// The single adjustable parameter of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostDriver {
    /// Fraction of the remaining value lost each year, compounded
    DepreciationRate,
    /// Flat repair bill charged every year
    AnnualRepairCost,
    /// Value lost over the whole horizon, as a single amount
    DepreciationAmount,
}

impl CostDriver {
    /// Inclusive range of values the model accepts for this driver
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::DepreciationRate => (0.0, 1.0),
            Self::AnnualRepairCost | Self::DepreciationAmount => (0.0, f64::INFINITY),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        value.is_finite() && value >= min && value <= max
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DepreciationRate => "Depreciation rate",
            Self::AnnualRepairCost => "Annual repair cost",
            Self::DepreciationAmount => "Depreciation",
        }
    }

    /// True when the driver's value is a currency amount rather than a ratio
    pub fn is_amount(&self) -> bool {
        !matches!(self, Self::DepreciationRate)
    }
}

/// Fixed parameters of one vehicle for a scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    pub purchase_price: f64,
    /// Insurance, energy and baseline maintenance per year
    pub annual_fixed_costs: f64,
    /// Lump sums paid once within the horizon (loan interest, fees)
    #[serde(default)]
    pub one_time_costs: f64,
    pub driver: CostDriver,
}

impl VehicleProfile {
    pub fn new(
        name: impl Into<String>,
        purchase_price: f64,
        annual_fixed_costs: f64,
        driver: CostDriver,
    ) -> Self {
        Self {
            name: name.into(),
            purchase_price,
            annual_fixed_costs,
            one_time_costs: 0.0,
            driver,
        }
    }

    pub fn with_one_time_costs(mut self, one_time_costs: f64) -> Self {
        self.one_time_costs = one_time_costs;
        self
    }
}

/// A single point to evaluate: both vehicles plus their driver values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub vehicle_a: VehicleProfile,
    pub vehicle_b: VehicleProfile,
    pub variable_a_value: f64,
    pub variable_b_value: f64,
    pub horizon_years: u32,
}

impl ScenarioInput {
    pub fn new(
        vehicle_a: VehicleProfile,
        vehicle_b: VehicleProfile,
        variable_a_value: f64,
        variable_b_value: f64,
    ) -> Self {
        Self {
            vehicle_a,
            vehicle_b,
            variable_a_value,
            variable_b_value,
            horizon_years: HORIZON_YEARS,
        }
    }
}

/// Which vehicle comes out cheaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    VehicleA,
    VehicleB,
    Tie,
}

impl Winner {
    /// Classify a difference computed as `a - b`
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Self::VehicleB
        } else if difference < 0.0 {
            Self::VehicleA
        } else {
            Self::Tie
        }
    }
}

/// Totals for one scenario point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub total_cost_a: f64,
    pub total_cost_b: f64,
    /// `total_cost_a - total_cost_b`
    pub difference: f64,
}

impl ScenarioResult {
    pub fn winner(&self) -> Winner {
        Winner::from_difference(self.difference)
    }
}

/// Decomposition of a vehicle's total cost over the horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostComponents {
    pub depreciation: f64,
    pub repairs: f64,
    pub recurring: f64,
    pub one_time: f64,
}

impl CostComponents {
    pub fn total(&self) -> f64 {
        self.depreciation + self.repairs + self.recurring + self.one_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_bounds() {
        assert!(CostDriver::DepreciationRate.contains(0.0));
        assert!(CostDriver::DepreciationRate.contains(1.0));
        assert!(!CostDriver::DepreciationRate.contains(1.01));
        assert!(CostDriver::AnnualRepairCost.contains(80_000.0));
        assert!(!CostDriver::AnnualRepairCost.contains(-1.0));
        assert!(!CostDriver::DepreciationAmount.contains(f64::NAN));
    }

    #[test]
    fn test_driver_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            driver: CostDriver,
        }

        let parsed: Wrapper = toml::from_str(r#"driver = "annual_repair_cost""#).unwrap();
        assert_eq!(parsed.driver, CostDriver::AnnualRepairCost);
    }

    #[test]
    fn test_winner_from_difference() {
        assert_eq!(Winner::from_difference(10.0), Winner::VehicleB);
        assert_eq!(Winner::from_difference(-0.5), Winner::VehicleA);
        assert_eq!(Winner::from_difference(0.0), Winner::Tie);
    }

    #[test]
    fn test_scenario_input_uses_fixed_horizon() {
        let a = VehicleProfile::new("A", 45_000.0, 1_200.0, CostDriver::DepreciationRate);
        let b = VehicleProfile::new("B", 70_000.0, 1_800.0, CostDriver::AnnualRepairCost);
        let input = ScenarioInput::new(a, b, 0.15, 2_000.0);
        assert_eq!(input.horizon_years, HORIZON_YEARS);
    }
}
