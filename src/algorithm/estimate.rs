//! Demographic sample-size estimation
//!
//! Suggests how many houses Stage 1 should draw in a village, given its
//! published house and population counts, the participant target and the
//! expected response rate. Purely advisory; no roster state is involved.

use serde::Serialize;

use crate::error::{Result, SamplingError};

/// Extra houses drawn on top of the computed requirement
pub const HOUSE_BUFFER: usize = 2;

/// Response rate assumed when none is given
pub const DEFAULT_RESPONSE_RATE: f64 = 0.65;

/// Recommended Stage 1 draw for one village
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingStrategy {
    /// Houses to draw, buffer included
    pub houses_needed: usize,
    /// Average residents per house
    pub avg_per_house: f64,
}

/// Estimate the number of houses to draw
///
/// `houses_needed = ceil(target / (response_rate * avg_per_house)) + HOUSE_BUFFER`
/// with `avg_per_house = population / houses`.
///
/// # Errors
/// `InvalidParameter` when `houses` is zero, when the village has no
/// population, or when `response_rate` is outside `(0, 1]`.
pub fn estimate_houses_needed(
    houses: u32,
    population: u32,
    target: usize,
    response_rate: f64,
) -> Result<SamplingStrategy> {
    if houses == 0 {
        return Err(SamplingError::invalid_parameter("house count must be positive"));
    }
    if !(response_rate > 0.0 && response_rate <= 1.0) {
        return Err(SamplingError::invalid_parameter(format!(
            "response rate must be in (0, 1], got {response_rate}"
        )));
    }
    if population == 0 {
        return Err(SamplingError::invalid_parameter(
            "population must be positive",
        ));
    }

    let avg_per_house = f64::from(population) / f64::from(houses);
    let expected_per_house = response_rate * avg_per_house;
    let houses_needed = (target as f64 / expected_per_house).ceil() as usize + HOUSE_BUFFER;

    Ok(SamplingStrategy {
        houses_needed,
        avg_per_house,
    })
}
