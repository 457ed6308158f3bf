//! Compounding rate projection for a currency pair.
use thiserror::Error;

/// Input validation failures for [`project`].
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("exchange rate must be a positive finite number, got {0}")]
    InvalidRate(f64),
    #[error("daily growth of {0}% would drive the rate to or below zero")]
    InvalidGrowth(f64),
    #[error("projection horizon must be at least one day")]
    EmptyHorizon,
}

/// Projects the cross-rate between two currencies over the next `days`
/// days by compounding each leg with its own daily growth percentage.
///
/// Both rates are quoted against a common base (e.g. units per USD).
/// Growth is a percentage per day: `0.1` means 0.1%, applied as the
/// factor `1 + 0.1/100`. The two legs compound independently; day `i`'s
/// value is the target leg divided by the base leg after `i` steps.
///
/// The returned series holds exactly `days` elements, day 1 first. With
/// equal growth on both legs it is constant at `target_rate/base_rate`.
pub fn project(
    base_rate: f64,
    target_rate: f64,
    base_growth: f64,
    target_growth: f64,
    days: u32,
) -> Result<Vec<f64>, ProjectionError> {
    if !base_rate.is_finite() || base_rate <= 0.0 {
        return Err(ProjectionError::InvalidRate(base_rate));
    }
    if !target_rate.is_finite() || target_rate <= 0.0 {
        return Err(ProjectionError::InvalidRate(target_rate));
    }
    if days == 0 {
        return Err(ProjectionError::EmptyHorizon);
    }

    // A growth of -100%/day or worse collapses a leg to zero; the base
    // leg is a divisor, so both are rejected up front.
    let base_factor = 1.0 + base_growth / 100.0;
    if !base_factor.is_finite() || base_factor <= 0.0 {
        return Err(ProjectionError::InvalidGrowth(base_growth));
    }
    let target_factor = 1.0 + target_growth / 100.0;
    if !target_factor.is_finite() || target_factor <= 0.0 {
        return Err(ProjectionError::InvalidGrowth(target_growth));
    }

    let mut series = Vec::with_capacity(days as usize);
    let mut base = base_rate;
    let mut target = target_rate;
    for _ in 0..days {
        base *= base_factor;
        target *= target_factor;
        series.push(target / base);
    }
    Ok(series)
}
