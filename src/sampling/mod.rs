mod allocation;
mod inverse_transform;

pub use allocation::{even_split, largest_remainder};
pub use inverse_transform::inverse_transform_parameters;

use crate::error::{Result, SamplingError};
use crate::math::SPEED_EPSILON;

/// Points per segment when no explicit count is requested.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 100;

/// Floor on the points a segment receives under proportional allocation.
pub const MIN_POINTS_PER_SEGMENT: usize = 2;

/// Parameters controlling curvature-adaptive sampling of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Number of uniform parameter values on which curvature is tabulated.
    pub grid_resolution: usize,
    /// Baseline weight as a fraction of the peak curvature.
    pub baseline_fraction: f64,
    /// Baseline weight used when the segment has no curvature at all.
    pub flat_baseline: f64,
    /// Added to the cubed speed in the curvature denominator.
    pub speed_epsilon: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            grid_resolution: 500,
            baseline_fraction: 0.01,
            flat_baseline: 1.0,
            speed_epsilon: SPEED_EPSILON,
        }
    }
}

impl SamplingParams {
    /// Checks that the parameters describe a usable sampling density.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidParameters`] if the grid has fewer
    /// than two nodes, a baseline is negative or non-finite, the flat
    /// baseline is not positive, or the speed epsilon is negative.
    pub fn validate(&self) -> Result<()> {
        if self.grid_resolution < 2 {
            return Err(SamplingError::InvalidParameters(format!(
                "grid_resolution must be at least 2, got {}",
                self.grid_resolution
            ))
            .into());
        }
        if !(self.baseline_fraction.is_finite() && self.baseline_fraction >= 0.0) {
            return Err(SamplingError::InvalidParameters(format!(
                "baseline_fraction must be finite and non-negative, got {}",
                self.baseline_fraction
            ))
            .into());
        }
        if !(self.flat_baseline.is_finite() && self.flat_baseline > 0.0) {
            return Err(SamplingError::InvalidParameters(format!(
                "flat_baseline must be finite and positive, got {}",
                self.flat_baseline
            ))
            .into());
        }
        if !(self.speed_epsilon.is_finite() && self.speed_epsilon >= 0.0) {
            return Err(SamplingError::InvalidParameters(format!(
                "speed_epsilon must be finite and non-negative, got {}",
                self.speed_epsilon
            ))
            .into());
        }
        Ok(())
    }
}
