use std::fmt;

use approx::AbsDiffEq;

use crate::error::{CompositionError, Result};
use crate::math::VectorN;

use super::Waypoint;

/// Control quantity compared at a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointQuantity {
    Position,
    Tangent,
    Curvature,
}

impl fmt::Display for JointQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::Tangent => "tangent",
            Self::Curvature => "curvature",
        };
        f.write_str(name)
    }
}

/// Compares the controls on either side of a joint.
///
/// Returns the first quantity whose components differ by more than
/// `tolerance`, with its largest absolute component deviation.
#[must_use]
pub fn joint_mismatch<const D: usize>(
    end: &Waypoint<D>,
    start: &Waypoint<D>,
    tolerance: f64,
) -> Option<(JointQuantity, f64)> {
    let pairs: [(JointQuantity, &VectorN<D>, &VectorN<D>); 3] = [
        (JointQuantity::Position, &end.position, &start.position),
        (JointQuantity::Tangent, &end.tangent, &start.tangent),
        (JointQuantity::Curvature, &end.curvature, &start.curvature),
    ];
    pairs
        .into_iter()
        .find(|(_, a, b)| !a.abs_diff_eq(b, tolerance))
        .map(|(quantity, a, b)| (quantity, (a - b).amax()))
}

/// Validates a chain of joints, each given as the `(end, start)` waypoints
/// of two consecutive pieces.
///
/// # Errors
///
/// Returns [`CompositionError::InvalidTolerance`] for a negative or
/// non-finite tolerance and [`CompositionError::Continuity`] naming the first
/// failing pair.
pub fn ensure_c2_chain<const D: usize>(
    joints: impl IntoIterator<Item = (Waypoint<D>, Waypoint<D>)>,
    tolerance: f64,
) -> Result<()> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(CompositionError::InvalidTolerance(tolerance).into());
    }
    for (i, (end, start)) in joints.into_iter().enumerate() {
        if let Some((quantity, deviation)) = joint_mismatch(&end, &start, tolerance) {
            tracing::debug!(first = i, %quantity, deviation, "joint is not C2 continuous");
            return Err(CompositionError::Continuity {
                first: i,
                second: i + 1,
                quantity,
                deviation,
            }
            .into());
        }
    }
    Ok(())
}
