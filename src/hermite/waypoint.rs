use crate::error::{CompositionError, GeometryError, Result};
use crate::math::VectorN;

use super::Tangent;

/// Position, tangent and curvature controls at one waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint<const D: usize> {
    /// Position of the curve at the waypoint.
    pub position: VectorN<D>,
    /// First derivative at the waypoint.
    pub tangent: VectorN<D>,
    /// Second derivative at the waypoint.
    pub curvature: VectorN<D>,
}

impl<const D: usize> Waypoint<D> {
    /// Creates a waypoint from resolved controls.
    #[must_use]
    pub fn new(position: VectorN<D>, tangent: VectorN<D>, curvature: VectorN<D>) -> Self {
        Self {
            position,
            tangent,
            curvature,
        }
    }

    /// Creates a waypoint from a possibly angle-based tangent. A missing
    /// curvature defaults to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent cannot be resolved in `D` dimensions.
    pub fn resolve(
        position: VectorN<D>,
        tangent: Tangent<D>,
        curvature: Option<VectorN<D>>,
    ) -> Result<Self> {
        Ok(Self::new(
            position,
            tangent.resolve()?,
            curvature.unwrap_or_else(VectorN::<D>::zeros),
        ))
    }

    /// Returns an error naming the first non-finite control.
    pub(crate) fn ensure_finite(&self, prefix: Endpoint) -> Result<()> {
        let checks = [
            (self.position, prefix.names()[0]),
            (self.tangent, prefix.names()[1]),
            (self.curvature, prefix.names()[2]),
        ];
        for (v, name) in checks {
            if v.iter().any(|c| !c.is_finite()) {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        Ok(())
    }
}

/// Which end of a segment a waypoint sits on, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    fn names(self) -> [&'static str; 3] {
        match self {
            Self::Start => ["p0", "v0", "a0"],
            Self::End => ["p1", "v1", "a1"],
        }
    }
}

/// Zips parallel control lists into waypoints.
///
/// Curvatures default to zero when `curvatures` is `None`. At least two
/// waypoints are required.
pub(crate) fn resolve_controls<const D: usize>(
    points: &[VectorN<D>],
    tangents: &[Tangent<D>],
    curvatures: Option<&[VectorN<D>]>,
) -> Result<Vec<Waypoint<D>>> {
    let curvature_count = curvatures.map_or(points.len(), <[VectorN<D>]>::len);
    if tangents.len() != points.len() || curvature_count != points.len() {
        return Err(CompositionError::LengthMismatch {
            points: points.len(),
            tangents: tangents.len(),
            curvatures: curvature_count,
        }
        .into());
    }
    if points.len() < 2 {
        return Err(CompositionError::TooFewControls {
            required: 2,
            found: points.len(),
        }
        .into());
    }

    points
        .iter()
        .zip(tangents)
        .enumerate()
        .map(|(i, (&position, &tangent))| {
            Waypoint::resolve(position, tangent, curvatures.map(|c| c[i]))
        })
        .collect()
}
