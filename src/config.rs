use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::breakdown::ItemisedCosts;
use crate::error::CostError;
use crate::model::{CostDriver, ScenarioInput, VehicleProfile};
use crate::sweep;

/// Environment variable prefix, e.g. `TCO__SCENARIO__VARIABLE_A=0.2`
pub const ENV_PREFIX: &str = "TCO";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub vehicles: VehiclesConfig,
    pub sweep: SweepsConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehiclesConfig {
    pub a: VehicleConfig,
    pub b: VehicleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehicleConfig {
    pub name: String,
    #[serde(default)]
    pub purchase_price: f64,
    pub driver: CostDriver,
    /// Recurring costs per year, by label
    #[serde(default)]
    pub annual_costs: BTreeMap<String, f64>,
    /// Costs paid once within the horizon, by label
    #[serde(default)]
    pub one_time_costs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepsConfig {
    pub a: SweepConfig,
    pub b: SweepConfig,
}

/// Slider settings for one driver. Exactly one of `step` or `points`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScenarioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_b: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "kr".to_string()
}

impl VehicleConfig {
    pub fn annual_fixed_costs(&self) -> f64 {
        self.annual_costs.values().sum()
    }

    pub fn one_time_total(&self) -> f64 {
        self.one_time_costs.values().sum()
    }

    pub fn profile(&self) -> VehicleProfile {
        VehicleProfile::new(
            self.name.clone(),
            self.purchase_price,
            self.annual_fixed_costs(),
            self.driver,
        )
        .with_one_time_costs(self.one_time_total())
    }

    pub fn itemised(&self) -> ItemisedCosts<'_> {
        ItemisedCosts {
            annual: &self.annual_costs,
            one_time: &self.one_time_costs,
        }
    }
}

impl SweepConfig {
    /// Enumerate the slider and clamp every value into the driver's bounds
    pub fn values(&self, driver: CostDriver) -> Result<Vec<f64>, CostError> {
        let raw = match (self.step, self.points) {
            (Some(step), None) => sweep::stepped(self.min, self.max, step)?,
            (None, Some(points)) => sweep::linspace(self.min, self.max, points)?,
            _ => {
                return Err(CostError::ConfigError(
                    "sweep needs exactly one of 'step' or 'points'".to_string(),
                ))
            }
        };
        Ok(sweep::clamp_all(&raw, driver))
    }
}

impl Config {
    /// Sampled values for both sliders, already clamped
    pub fn sweep_values(&self) -> Result<(Vec<f64>, Vec<f64>), CostError> {
        Ok((
            self.sweep.a.values(self.vehicles.a.driver)?,
            self.sweep.b.values(self.vehicles.b.driver)?,
        ))
    }

    /// Build the single-point scenario
    ///
    /// Explicit overrides win over `[scenario]`, which wins over the middle
    /// sampled value of each sweep. The result is clamped.
    pub fn scenario_input(
        &self,
        override_a: Option<f64>,
        override_b: Option<f64>,
    ) -> Result<ScenarioInput, CostError> {
        let (a_values, b_values) = self.sweep_values()?;
        let pick = |explicit: Option<f64>, configured: Option<f64>, values: &[f64]| {
            explicit
                .or(configured)
                .or_else(|| sweep::middle(values))
                .ok_or_else(|| CostError::ConfigError("sweep produced no values".to_string()))
        };

        let a = pick(override_a, self.scenario.variable_a, a_values.as_slice())?;
        let b = pick(override_b, self.scenario.variable_b, b_values.as_slice())?;

        Ok(ScenarioInput::new(
            self.vehicles.a.profile(),
            self.vehicles.b.profile(),
            sweep::clamp(a, self.vehicles.a.driver),
            sweep::clamp(b, self.vehicles.b.driver),
        ))
    }
}

/// Load configuration from a TOML file, overlaid with `TCO__*` variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Parse configuration from a TOML string, without environment overrides
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(contents, config::FileFormat::Toml))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    for (slot, vehicle, slider) in [
        ("a", &cfg.vehicles.a, &cfg.sweep.a),
        ("b", &cfg.vehicles.b, &cfg.sweep.b),
    ] {
        if vehicle.name.trim().is_empty() {
            anyhow::bail!("Vehicle '{}' name cannot be empty", slot);
        }

        check_amount(slot, "purchase_price", vehicle.purchase_price)?;
        let items = vehicle.annual_costs.iter().chain(vehicle.one_time_costs.iter());
        for (label, amount) in items {
            check_amount(slot, label, *amount)?;
        }

        if vehicle.driver == CostDriver::DepreciationRate && vehicle.purchase_price == 0.0 {
            warn!(
                vehicle = %vehicle.name,
                "Depreciation rate set without a purchase price; depreciation will be zero"
            );
        }

        if slider.min > slider.max {
            anyhow::bail!(
                "Sweep '{}' min ({}) must not exceed max ({})",
                slot,
                slider.min,
                slider.max
            );
        }

        match (slider.step, slider.points) {
            (Some(_), Some(_)) | (None, None) => {
                anyhow::bail!("Sweep '{}' needs exactly one of 'step' or 'points'", slot)
            }
            (Some(step), None) if !(step.is_finite() && step > 0.0) => {
                anyhow::bail!("Sweep '{}' step must be positive, got {}", slot, step)
            }
            (None, Some(0)) => anyhow::bail!("Sweep '{}' points must be at least 1", slot),
            _ => {}
        }

        if let Err(e) = slider.values(vehicle.driver) {
            anyhow::bail!("Sweep '{}' is not usable: {}", slot, e);
        }

        if !vehicle.driver.contains(slider.min) || !vehicle.driver.contains(slider.max) {
            let (lo, hi) = vehicle.driver.bounds();
            anyhow::bail!(
                "Sweep '{}' range [{}, {}] is outside the valid {} range [{}, {}]",
                slot,
                slider.min,
                slider.max,
                vehicle.driver.label().to_lowercase(),
                lo,
                hi
            );
        }
    }

    Ok(())
}

fn check_amount(slot: &str, field: &str, value: f64) -> anyhow::Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        anyhow::bail!(
            "Vehicle '{}' {} must be a non-negative amount, got {}",
            slot,
            field,
            value
        );
    }
    Ok(())
}
