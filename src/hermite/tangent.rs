use crate::error::{GeometryError, Result};
use crate::math::VectorN;

/// Tangent control as supplied by the caller.
///
/// Angles are in radians. Every variant resolves to a plain direction
/// vector once, before any segment is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tangent<const D: usize> {
    /// Explicit first-derivative vector.
    Vector(VectorN<D>),
    /// 2D heading measured counter-clockwise from the +x axis.
    Heading { angle: f64, magnitude: f64 },
    /// 3D direction `(cos θ cos φ, sin θ cos φ, sin φ)` for azimuth `θ`
    /// and elevation `φ`.
    Spherical {
        azimuth: f64,
        elevation: f64,
        magnitude: f64,
    },
}

impl<const D: usize> Tangent<D> {
    /// Unit-length 2D heading.
    #[must_use]
    pub fn heading(angle: f64) -> Self {
        Self::Heading {
            angle,
            magnitude: 1.0,
        }
    }

    /// 2D heading scaled by `magnitude`.
    #[must_use]
    pub fn heading_scaled(angle: f64, magnitude: f64) -> Self {
        Self::Heading { angle, magnitude }
    }

    /// Unit-length 3D direction from azimuth and elevation.
    #[must_use]
    pub fn spherical(azimuth: f64, elevation: f64) -> Self {
        Self::Spherical {
            azimuth,
            elevation,
            magnitude: 1.0,
        }
    }

    /// 3D direction from azimuth and elevation, scaled by `magnitude`.
    #[must_use]
    pub fn spherical_scaled(azimuth: f64, elevation: f64, magnitude: f64) -> Self {
        Self::Spherical {
            azimuth,
            elevation,
            magnitude,
        }
    }

    /// Resolves the tangent into a first-derivative vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AngleTangent`] when a heading is used outside
    /// 2D or spherical angles outside 3D.
    pub fn resolve(&self) -> Result<VectorN<D>> {
        match *self {
            Self::Vector(v) => Ok(v),
            Self::Heading { angle, magnitude } if D == 2 => {
                let direction = [angle.cos(), angle.sin()];
                Ok(VectorN::<D>::from_fn(|i, _| direction[i]) * magnitude)
            }
            Self::Spherical {
                azimuth,
                elevation,
                magnitude,
            } if D == 3 => {
                let direction = [
                    azimuth.cos() * elevation.cos(),
                    azimuth.sin() * elevation.cos(),
                    elevation.sin(),
                ];
                Ok(VectorN::<D>::from_fn(|i, _| direction[i]) * magnitude)
            }
            Self::Heading { .. } | Self::Spherical { .. } => {
                Err(GeometryError::AngleTangent { dim: D }.into())
            }
        }
    }
}

impl<const D: usize> From<VectorN<D>> for Tangent<D> {
    fn from(v: VectorN<D>) -> Self {
        Self::Vector(v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HermiteError;
    use crate::math::{Vector1, Vector2, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn vector_passes_through() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(Tangent::from(v).resolve().unwrap(), v);
    }

    #[test]
    fn heading_straight_up() {
        let v: Vector2 = Tangent::heading(FRAC_PI_2).resolve().unwrap();
        assert!(v.x.abs() < 1e-15);
        assert!((v.y - 1.0).abs() < 1e-15);
    }

    #[test]
    fn heading_with_magnitude() {
        let v: Vector2 = Tangent::heading_scaled(0.0, 3.0).resolve().unwrap();
        approx::assert_abs_diff_eq!(v, Vector2::new(3.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn spherical_elevation_points_up() {
        let v: Vector3 = Tangent::spherical(0.3, FRAC_PI_2).resolve().unwrap();
        approx::assert_abs_diff_eq!(v, Vector3::z(), epsilon = 1e-15);
    }

    #[test]
    fn spherical_is_unit_length() {
        let v: Vector3 = Tangent::spherical_scaled(1.1, -0.4, 2.0).resolve().unwrap();
        assert!((v.norm() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn heading_rejected_in_one_dimension() {
        let result: Result<Vector1> = Tangent::heading(0.0).resolve();
        assert!(matches!(
            result,
            Err(HermiteError::Geometry(GeometryError::AngleTangent { dim: 1 }))
        ));
    }

    #[test]
    fn spherical_rejected_in_two_dimensions() {
        let result: Result<Vector2> = Tangent::spherical(0.0, 0.0).resolve();
        assert!(result.is_err());
    }
}
