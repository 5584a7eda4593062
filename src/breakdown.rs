//! Itemised cost breakdown for a single vehicle

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::CostError;
use crate::model::{cost_components, CostDriver, VehicleProfile};

/// Remainders below this are treated as rounding noise
const REMAINDER_EPSILON: f64 = 1e-9;

/// Labelled cost items behind a profile's aggregated amounts
#[derive(Debug, Clone, Copy)]
pub struct ItemisedCosts<'a> {
    pub annual: &'a BTreeMap<String, f64>,
    pub one_time: &'a BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
    /// Fraction of the vehicle total, in [0, 1]
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub vehicle: String,
    pub purchase_price: f64,
    pub items: Vec<LineItem>,
    pub total: f64,
}

/// Break a vehicle's total into labelled line items
///
/// Annual items are multiplied by the horizon. If the items do not add up
/// to the profile's aggregated amounts, the gap is reported as an
/// "Other" line so the items always sum to the total.
pub fn breakdown(
    profile: &VehicleProfile,
    items: ItemisedCosts<'_>,
    variable_value: f64,
    horizon_years: u32,
) -> Result<Breakdown, CostError> {
    let components = cost_components(profile, variable_value, horizon_years)?;
    let total = components.total();
    let years = f64::from(horizon_years);

    let mut rows: Vec<(String, f64)> = Vec::new();
    match profile.driver {
        CostDriver::DepreciationRate | CostDriver::DepreciationAmount => {
            rows.push(("Depreciation".to_string(), components.depreciation));
        }
        CostDriver::AnnualRepairCost => {
            rows.push((
                format!("Repairs ({} yrs)", horizon_years),
                components.repairs,
            ));
        }
    }

    let mut annual_sum = 0.0;
    for (label, amount) in items.annual {
        annual_sum += amount;
        rows.push((
            format!("{} ({} yrs)", humanize(label), horizon_years),
            amount * years,
        ));
    }
    let recurring_gap = components.recurring - annual_sum * years;
    if recurring_gap.abs() > REMAINDER_EPSILON {
        rows.push((format!("Other recurring ({} yrs)", horizon_years), recurring_gap));
    }

    let mut one_time_sum = 0.0;
    for (label, amount) in items.one_time {
        one_time_sum += amount;
        rows.push((humanize(label), *amount));
    }
    let one_time_gap = components.one_time - one_time_sum;
    if one_time_gap.abs() > REMAINDER_EPSILON {
        rows.push(("Other one-time".to_string(), one_time_gap));
    }

    let items = rows
        .into_iter()
        .map(|(label, amount)| LineItem {
            label,
            amount,
            share: if total > 0.0 { amount / total } else { 0.0 },
        })
        .collect();

    Ok(Breakdown {
        vehicle: profile.name.clone(),
        purchase_price: profile.purchase_price,
        items,
        total,
    })
}

/// `refinancing_fee` -> `Refinancing fee`
fn humanize(label: &str) -> String {
    let spaced = label.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
