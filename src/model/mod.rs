//! Pure cost-of-ownership model
//!
//! Every operation here is a function of its arguments only. Callers are
//! responsible for clamping slider values before handing them in.

pub mod calculator;
pub mod heatmap;
pub mod types;

pub use calculator::{compare, compute_total_cost, cost_components};
pub use heatmap::{build_heatmap, HeatmapGrid, WinnerCounts};
pub use types::{
    CostComponents, CostDriver, ScenarioInput, ScenarioResult, VehicleProfile, Winner,
    HORIZON_YEARS,
};
