mod continuity;
mod curve;
mod segment;
mod spline;
mod tangent;
mod waypoint;

pub use continuity::{ensure_c2_chain, joint_mismatch, JointQuantity};
pub use curve::Curve;
pub use segment::Segment;
pub use spline::Spline;
pub use tangent::Tangent;
pub use waypoint::Waypoint;

use crate::math::curvature::curvature_magnitude;
use crate::math::{VectorN, SPEED_EPSILON};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain, bounds included.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }
}

/// Trait for polynomial curves in `D`-dimensional space.
///
/// Evaluation is total: parameters outside [`ParametricCurve::domain`]
/// extrapolate the underlying polynomial.
pub trait ParametricCurve<const D: usize> {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> VectorN<D>;

    /// First derivative with respect to `t`.
    fn derivative(&self, t: f64) -> VectorN<D>;

    /// Second derivative with respect to `t`.
    fn second_derivative(&self, t: f64) -> VectorN<D>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Curvature magnitude `‖r′ × r″‖ / (‖r′‖³ + ε)` at `t`; zero in 1D.
    fn curvature(&self, t: f64) -> f64 {
        curvature_magnitude(&self.derivative(t), &self.second_derivative(t), SPEED_EPSILON)
    }
}
