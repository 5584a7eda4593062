use crate::error::CostError;
use crate::model::types::{
    CostComponents, CostDriver, ScenarioInput, ScenarioResult, VehicleProfile,
};

/// Split a vehicle's cost over `horizon_years` into its components
///
/// Inputs are expected to be clamped already. Anything still out of range
/// (zero horizon, negative or non-finite amounts, a driver value outside
/// the driver's bounds) is rejected with [`CostError::InvalidParameter`].
pub fn cost_components(
    profile: &VehicleProfile,
    variable_value: f64,
    horizon_years: u32,
) -> Result<CostComponents, CostError> {
    validate(profile, variable_value, horizon_years)?;

    let years = f64::from(horizon_years);
    let mut components = CostComponents {
        recurring: profile.annual_fixed_costs * years,
        one_time: profile.one_time_costs,
        ..CostComponents::default()
    };

    match profile.driver {
        CostDriver::DepreciationRate => {
            let exponent = i32::try_from(horizon_years).map_err(|_| {
                CostError::invalid(format!("horizon_years too large: {}", horizon_years))
            })?;
            let retained = (1.0 - variable_value).powi(exponent);
            components.depreciation = profile.purchase_price * (1.0 - retained);
        }
        CostDriver::DepreciationAmount => {
            components.depreciation = variable_value;
        }
        CostDriver::AnnualRepairCost => {
            components.repairs = variable_value * years;
        }
    }

    Ok(components)
}

/// Total cost of ownership of one vehicle over `horizon_years`
pub fn compute_total_cost(
    profile: &VehicleProfile,
    variable_value: f64,
    horizon_years: u32,
) -> Result<f64, CostError> {
    cost_components(profile, variable_value, horizon_years).map(|c| c.total())
}

/// Evaluate both vehicles of a scenario and their difference (a - b)
pub fn compare(input: &ScenarioInput) -> Result<ScenarioResult, CostError> {
    let total_cost_a =
        compute_total_cost(&input.vehicle_a, input.variable_a_value, input.horizon_years)?;
    let total_cost_b =
        compute_total_cost(&input.vehicle_b, input.variable_b_value, input.horizon_years)?;

    Ok(ScenarioResult {
        total_cost_a,
        total_cost_b,
        difference: total_cost_a - total_cost_b,
    })
}

fn validate(
    profile: &VehicleProfile,
    variable_value: f64,
    horizon_years: u32,
) -> Result<(), CostError> {
    if horizon_years == 0 {
        return Err(CostError::invalid("horizon_years must be positive, got 0"));
    }

    check_amount(&profile.name, "purchase_price", profile.purchase_price)?;
    check_amount(&profile.name, "annual_fixed_costs", profile.annual_fixed_costs)?;
    check_amount(&profile.name, "one_time_costs", profile.one_time_costs)?;

    if !profile.driver.contains(variable_value) {
        let (min, max) = profile.driver.bounds();
        return Err(CostError::invalid(format!(
            "{}: {} must be within [{}, {}], got {}",
            profile.name,
            profile.driver.label().to_lowercase(),
            min,
            max,
            variable_value
        )));
    }

    Ok(())
}

fn check_amount(vehicle: &str, field: &str, value: f64) -> Result<(), CostError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CostError::invalid(format!(
            "{}: {} must be a non-negative amount, got {}",
            vehicle, field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::HORIZON_YEARS;

    const EPS: f64 = 1e-9;

    fn depreciating() -> VehicleProfile {
        VehicleProfile::new("Vehicle A", 45_000.0, 1_200.0, CostDriver::DepreciationRate)
    }

    fn repairing() -> VehicleProfile {
        VehicleProfile::new("Vehicle B", 70_000.0, 1_800.0, CostDriver::AnnualRepairCost)
    }

    #[test]
    fn test_depreciation_rate_scenario() {
        let total = compute_total_cost(&depreciating(), 0.15, HORIZON_YEARS).unwrap();
        // 45000 * (1 - 0.85^3) + 1200 * 3
        assert!((total - 20_964.375).abs() < EPS);
    }

    #[test]
    fn test_repair_cost_scenario_excludes_purchase_price() {
        let total = compute_total_cost(&repairing(), 2_000.0, HORIZON_YEARS).unwrap();
        assert!((total - 11_400.0).abs() < EPS);
    }

    #[test]
    fn test_depreciation_amount_is_flat() {
        let profile = VehicleProfile::new("Tesla", 0.0, 0.0, CostDriver::DepreciationAmount)
            .with_one_time_costs(2_150.0);
        let total = compute_total_cost(&profile, 150_000.0, HORIZON_YEARS).unwrap();
        assert_eq!(total, 152_150.0);
    }

    #[test]
    fn test_components_sum_to_total() {
        let profile = depreciating().with_one_time_costs(33_000.0);
        let components = cost_components(&profile, 0.2, HORIZON_YEARS).unwrap();
        let total = compute_total_cost(&profile, 0.2, HORIZON_YEARS).unwrap();
        assert_eq!(components.total(), total);
        assert_eq!(components.repairs, 0.0);
        assert_eq!(components.one_time, 33_000.0);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let result = compute_total_cost(&depreciating(), 0.15, 0);
        assert!(matches!(result, Err(CostError::InvalidParameter(_))));
        assert!(result.unwrap_err().to_string().contains("horizon_years"));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let mut profile = repairing();
        assert!(compute_total_cost(&profile, -1.0, HORIZON_YEARS).is_err());

        profile.annual_fixed_costs = -5.0;
        let err = compute_total_cost(&profile, 100.0, HORIZON_YEARS).unwrap_err();
        assert!(err.to_string().contains("annual_fixed_costs"));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        assert!(compute_total_cost(&depreciating(), 1.5, HORIZON_YEARS).is_err());
    }

    #[test]
    fn test_monotonic_in_horizon() {
        for profile in [depreciating(), repairing()] {
            let value = if profile.driver == CostDriver::DepreciationRate { 0.3 } else { 500.0 };
            let mut previous = 0.0;
            for years in 1..=10 {
                let total = compute_total_cost(&profile, value, years).unwrap();
                assert!(total >= previous);
                previous = total;
            }
        }
    }

    #[test]
    fn test_compare_difference() {
        let input = ScenarioInput::new(depreciating(), repairing(), 0.15, 2_000.0);
        let result = compare(&input).unwrap();
        assert!((result.difference - (20_964.375 - 11_400.0)).abs() < EPS);
        assert_eq!(result.difference, result.total_cost_a - result.total_cost_b);
    }

    #[test]
    fn test_compare_propagates_errors() {
        let mut input = ScenarioInput::new(depreciating(), repairing(), 0.15, 2_000.0);
        input.horizon_years = 0;
        assert!(compare(&input).is_err());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let profile = depreciating();
        let first = compute_total_cost(&profile, 0.37, HORIZON_YEARS).unwrap();
        let second = compute_total_cost(&profile, 0.37, HORIZON_YEARS).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
