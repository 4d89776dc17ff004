//! Validating wrappers
//!
//! The functions at the crate root trust their inputs: an out-of-range
//! threshold or a wrong `min_cost` gives a numerically wrong answer rather
//! than an error. The wrappers here check thresholds and declared cost
//! bounds first and report problems as [`SymlarError::Validation`].
//!
//! Symbol-level contracts (no negative costs, `min_cost` being a true lower
//! bound) cannot be checked without evaluating every pair and stay the
//! caller's responsibility.

use crate::algorithms::{self, CostFunction};
use crate::dictionary::PronunciationDictionary;
use crate::error::{Result, SymlarError};

/// Validate that a similarity threshold is in the valid range [0.0, 1.0]
fn validate_similarity(value: f64, param_name: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(SymlarError::Validation(format!(
            "{} must be a finite number, got {}",
            param_name, value
        )));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(SymlarError::Validation(format!(
            "{} must be in range [0.0, 1.0], got {}",
            param_name, value
        )));
    }
    Ok(())
}

/// Validate that a distance threshold is non-negative and not NaN
fn validate_distance(value: f64, param_name: &str) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(SymlarError::Validation(format!(
            "{} must be a non-negative number, got {}",
            param_name, value
        )));
    }
    Ok(())
}

/// Validate the declared bounds of a cost function
fn validate_cost_bounds<T: ?Sized, C: CostFunction<T> + ?Sized>(cost_fn: &C) -> Result<()> {
    let (min_cost, max_cost) = (cost_fn.min_cost(), cost_fn.max_cost());
    if !min_cost.is_finite() || min_cost < 0.0 {
        return Err(SymlarError::Validation(format!(
            "min_cost must be a finite non-negative number, got {}",
            min_cost
        )));
    }
    if !max_cost.is_finite() || max_cost <= 0.0 {
        return Err(SymlarError::Validation(format!(
            "max_cost must be a finite positive number, got {}",
            max_cost
        )));
    }
    if min_cost > max_cost {
        return Err(SymlarError::Validation(format!(
            "min_cost ({}) must not exceed max_cost ({})",
            min_cost, max_cost
        )));
    }
    Ok(())
}

/// [`algorithms::vlev`] with a checked threshold.
pub fn vlev<T: PartialEq>(left: &[T], right: &[T], max_dist: f64) -> Result<bool> {
    validate_distance(max_dist, "max_dist")?;
    Ok(algorithms::vlev(left, right, max_dist))
}

/// [`algorithms::eddist`] with checked cost bounds.
pub fn eddist<T, C>(left: &[T], right: &[T], cost_fn: &C) -> Result<f64>
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    validate_cost_bounds::<T, C>(cost_fn)?;
    Ok(algorithms::eddist(left, right, cost_fn))
}

/// [`algorithms::veddist`] with checked threshold and cost bounds.
pub fn veddist<T, C>(left: &[T], right: &[T], cost_fn: &C, max_dist: f64) -> Result<bool>
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    validate_distance(max_dist, "max_dist")?;
    validate_cost_bounds::<T, C>(cost_fn)?;
    Ok(algorithms::veddist(left, right, cost_fn, max_dist))
}

/// [`algorithms::edsim`] with checked cost bounds.
pub fn edsim<T, C>(left: &[T], right: &[T], cost_fn: &C) -> Result<f64>
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    validate_cost_bounds::<T, C>(cost_fn)?;
    Ok(algorithms::edsim(left, right, cost_fn))
}

/// [`algorithms::vedsim`] with checked threshold and cost bounds.
pub fn vedsim<T, C>(left: &[T], right: &[T], cost_fn: &C, min_sim: f64) -> Result<bool>
where
    T: PartialEq,
    C: CostFunction<T> + ?Sized,
{
    validate_similarity(min_sim, "min_sim")?;
    validate_cost_bounds::<T, C>(cost_fn)?;
    Ok(algorithms::vedsim(left, right, cost_fn, min_sim))
}

/// [`algorithms::vphonesim`] with a checked threshold.
pub fn vphonesim(
    dictionary: &PronunciationDictionary,
    left: &str,
    right: &str,
    min_sim: f64,
) -> Result<bool> {
    validate_similarity(min_sim, "min_sim")?;
    Ok(algorithms::vphonesim(dictionary, left, right, min_sim))
}
