//! Slider range enumeration and clamping
//!
//! These helpers belong to the presentation side: they turn slider
//! settings into the ordered value sequences the heatmap is built from.

use crate::error::CostError;
use crate::model::CostDriver;

/// Slack allowed when deciding whether `max` is reached by a whole step
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper limit on the number of values one slider may produce
pub const MAX_POINTS: usize = 1_000;

/// Enumerate `min, min + step, ...` up to and including `max`
///
/// Values are computed as `min + k * step` so there is no accumulated
/// drift. A `max` that does not fall on a step boundary is not appended;
/// a last value within tolerance of `max` is pinned to `max` exactly.
pub fn stepped(min: f64, max: f64, step: f64) -> Result<Vec<f64>, CostError> {
    check_bounds(min, max)?;
    if !(step.is_finite() && step > 0.0) {
        return Err(CostError::invalid(format!("step must be positive, got {}", step)));
    }

    let count = ((max - min) / step + STEP_TOLERANCE).floor() + 1.0;
    if !(count <= MAX_POINTS as f64) {
        return Err(CostError::invalid(format!(
            "step {} over [{}, {}] yields more than {} values",
            step, min, max, MAX_POINTS
        )));
    }

    let count = count as usize;
    Ok((0..count)
        .map(|k| {
            let value = min + k as f64 * step;
            if (value - max).abs() <= STEP_TOLERANCE * step {
                max
            } else {
                value
            }
        })
        .collect())
}

/// `points` evenly spaced values from `min` to `max`, both included
pub fn linspace(min: f64, max: f64, points: usize) -> Result<Vec<f64>, CostError> {
    check_bounds(min, max)?;
    match points {
        0 => Err(CostError::invalid("points must be at least 1")),
        n if n > MAX_POINTS => Err(CostError::invalid(format!(
            "points must be at most {}, got {}",
            MAX_POINTS, n
        ))),
        1 => Ok(vec![min]),
        n => {
            let span = max - min;
            let last = n - 1;
            Ok((0..n)
                .map(|k| {
                    if k == last {
                        max
                    } else {
                        min + span * k as f64 / last as f64
                    }
                })
                .collect())
        }
    }
}

/// Pull `value` into the driver's valid bounds. NaN maps to the lower bound.
pub fn clamp(value: f64, driver: CostDriver) -> f64 {
    let (min, max) = driver.bounds();
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Clamp every value of a range; order and length are preserved
pub fn clamp_all(values: &[f64], driver: CostDriver) -> Vec<f64> {
    values.iter().map(|&v| clamp(v, driver)).collect()
}

/// Default selection for a range: the value in the middle
pub fn middle(values: &[f64]) -> Option<f64> {
    values.get(values.len() / 2).copied()
}

fn check_bounds(min: f64, max: f64) -> Result<(), CostError> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(CostError::invalid(format!(
            "range bounds must be finite, got [{}, {}]",
            min, max
        )));
    }
    if min > max {
        return Err(CostError::invalid(format!(
            "range min {} exceeds max {}",
            min, max
        )));
    }
    Ok(())
}
