use std::fmt;

use nalgebra::SMatrix;

use crate::error::{GeometryError, Result};
use crate::math::curvature::curvature_magnitude;
use crate::math::interp::linspace;
use crate::math::quintic::{basis_weights, boundary_matrix};
use crate::math::{monomial, VectorN};
use crate::sampling::{inverse_transform_parameters, SamplingParams};

use super::waypoint::Endpoint;
use super::{CurveDomain, ParametricCurve, Waypoint};

/// A quintic Hermite segment on `t ∈ [0, 1]`.
///
/// The segment matches position, first and second derivative at both ends.
/// Its polynomial is stored in monomial form: row `d` of the coefficient
/// matrix holds `[c0, c1, c2, c3, c4, c5]` for dimension `d`, so
/// `x_d(t) = c0 + c1·t + c2·t² + c3·t³ + c4·t⁴ + c5·t⁵`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<const D: usize> {
    start: Waypoint<D>,
    end: Waypoint<D>,
    coefficients: SMatrix<f64, D, 6>,
}

impl<const D: usize> Segment<D> {
    /// Creates a segment from its six boundary controls.
    ///
    /// # Errors
    ///
    /// Returns an error if `D` is not 1, 2 or 3, or if any control has a
    /// non-finite component.
    pub fn new(
        p0: VectorN<D>,
        p1: VectorN<D>,
        v0: VectorN<D>,
        v1: VectorN<D>,
        a0: VectorN<D>,
        a1: VectorN<D>,
    ) -> Result<Self> {
        Self::between(&Waypoint::new(p0, v0, a0), &Waypoint::new(p1, v1, a1))
    }

    /// Creates a segment spanning two waypoints.
    ///
    /// # Errors
    ///
    /// Returns an error if `D` is not 1, 2 or 3, or if any control has a
    /// non-finite component.
    pub fn between(start: &Waypoint<D>, end: &Waypoint<D>) -> Result<Self> {
        if !(1..=3).contains(&D) {
            return Err(GeometryError::UnsupportedDimension(D).into());
        }
        start.ensure_finite(Endpoint::Start)?;
        end.ensure_finite(Endpoint::End)?;

        let coefficients = solve_coefficients(start, end)?;
        Ok(Self {
            start: *start,
            end: *end,
            coefficients,
        })
    }

    /// Creates a segment from untyped component slices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShapeMismatch`] naming the first slice whose
    /// length differs from `D`, plus any error from [`Segment::new`].
    pub fn from_slices(
        p0: &[f64],
        p1: &[f64],
        v0: &[f64],
        v1: &[f64],
        a0: &[f64],
        a1: &[f64],
    ) -> Result<Self> {
        let controls = [
            ("p0", p0),
            ("p1", p1),
            ("v0", v0),
            ("v1", v1),
            ("a0", a0),
            ("a1", a1),
        ];
        for (argument, slice) in controls {
            if slice.len() != D {
                return Err(GeometryError::ShapeMismatch {
                    argument,
                    expected: D,
                    found: slice.len(),
                }
                .into());
            }
        }
        Self::new(
            VectorN::<D>::from_column_slice(p0),
            VectorN::<D>::from_column_slice(p1),
            VectorN::<D>::from_column_slice(v0),
            VectorN::<D>::from_column_slice(v1),
            VectorN::<D>::from_column_slice(a0),
            VectorN::<D>::from_column_slice(a1),
        )
    }

    /// Returns the spatial dimension.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn dim(&self) -> usize {
        D
    }

    /// Returns the start position.
    #[must_use]
    pub fn p0(&self) -> &VectorN<D> {
        &self.start.position
    }

    /// Returns the end position.
    #[must_use]
    pub fn p1(&self) -> &VectorN<D> {
        &self.end.position
    }

    /// Returns the start tangent.
    #[must_use]
    pub fn v0(&self) -> &VectorN<D> {
        &self.start.tangent
    }

    /// Returns the end tangent.
    #[must_use]
    pub fn v1(&self) -> &VectorN<D> {
        &self.end.tangent
    }

    /// Returns the start curvature (second derivative).
    #[must_use]
    pub fn a0(&self) -> &VectorN<D> {
        &self.start.curvature
    }

    /// Returns the end curvature (second derivative).
    #[must_use]
    pub fn a1(&self) -> &VectorN<D> {
        &self.end.curvature
    }

    /// Returns the controls at `t = 0`.
    #[must_use]
    pub fn start(&self) -> Waypoint<D> {
        self.start
    }

    /// Returns the controls at `t = 1`.
    #[must_use]
    pub fn end(&self) -> Waypoint<D> {
        self.end
    }

    /// Returns the `D x 6` monomial coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &SMatrix<f64, D, 6> {
        &self.coefficients
    }

    /// Larger of the two endpoint second-derivative norms.
    #[must_use]
    pub fn peak_endpoint_curvature(&self) -> f64 {
        self.start.curvature.norm().max(self.end.curvature.norm())
    }

    /// Evaluates the segment through the Hermite blending functions
    /// instead of the monomial coefficients.
    #[must_use]
    pub fn evaluate_blended(&self, t: f64) -> VectorN<D> {
        let w = basis_weights(t);
        self.start.position * w[0]
            + self.start.tangent * w[1]
            + self.start.curvature * w[2]
            + self.end.position * w[3]
            + self.end.tangent * w[4]
            + self.end.curvature * w[5]
    }

    /// Curvature magnitude at `t` with a custom speed guard.
    #[must_use]
    pub fn curvature_with(&self, t: f64, epsilon: f64) -> f64 {
        curvature_magnitude(&self.derivative(t), &self.second_derivative(t), epsilon)
    }

    /// Curvature-biased sample parameters, ascending from 0 to 1.
    #[must_use]
    pub fn sample_parameters(&self, n: usize) -> Vec<f64> {
        self.parameters_with(n, &SamplingParams::default())
    }

    /// Samples `n` points biased toward high curvature, ordered from `p0`
    /// to `p1`.
    ///
    /// The first and last points are `p0` and `p1` whenever `n >= 2`.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<VectorN<D>> {
        self.points_at(&self.sample_parameters(n))
    }

    /// Samples `n` points with custom sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    pub fn sample_with(&self, n: usize, params: &SamplingParams) -> Result<Vec<VectorN<D>>> {
        params.validate()?;
        Ok(self.points_at(&self.parameters_with(n, params)))
    }

    fn parameters_with(&self, n: usize, params: &SamplingParams) -> Vec<f64> {
        let grid = linspace(0.0, 1.0, params.grid_resolution);
        let density: Vec<f64> = grid
            .iter()
            .map(|&t| self.curvature_with(t, params.speed_epsilon))
            .collect();
        tracing::trace!(n, grid = grid.len(), "sampling quintic segment");
        inverse_transform_parameters(&grid, &density, n, params)
    }

    fn points_at(&self, parameters: &[f64]) -> Vec<VectorN<D>> {
        parameters.iter().map(|&t| self.evaluate(t)).collect()
    }
}

impl<const D: usize> ParametricCurve<D> for Segment<D> {
    fn evaluate(&self, t: f64) -> VectorN<D> {
        self.coefficients * monomial::position(t)
    }

    fn derivative(&self, t: f64) -> VectorN<D> {
        self.coefficients * monomial::velocity(t)
    }

    fn second_derivative(&self, t: f64) -> VectorN<D> {
        self.coefficients * monomial::acceleration(t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

impl<const D: usize> fmt::Display for Segment<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quintic Hermite segment ({D}D):")?;
        writeln!(
            f,
            "  p0: {:?}, v0: {:?}, a0: {:?}",
            self.start.position.as_slice(),
            self.start.tangent.as_slice(),
            self.start.curvature.as_slice()
        )?;
        write!(
            f,
            "  p1: {:?}, v1: {:?}, a1: {:?}",
            self.end.position.as_slice(),
            self.end.tangent.as_slice(),
            self.end.curvature.as_slice()
        )
    }
}

/// Solves the boundary system for every dimension at once.
///
/// The right-hand side has one column per dimension with rows
/// `[p0, v0, a0, p1, v1, a1]`; the result is transposed so each row holds
/// one dimension's coefficients.
fn solve_coefficients<const D: usize>(
    start: &Waypoint<D>,
    end: &Waypoint<D>,
) -> Result<SMatrix<f64, D, 6>> {
    let constraints = [
        start.position,
        start.tangent,
        start.curvature,
        end.position,
        end.tangent,
        end.curvature,
    ];
    let rhs = SMatrix::<f64, 6, D>::from_fn(|row, col| constraints[row][col]);
    let solution = boundary_matrix()
        .lu()
        .solve(&rhs)
        .ok_or(GeometryError::SingularSystem)?;
    Ok(solution.transpose())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HermiteError;
    use crate::math::{Vector1, Vector2, Vector3};
    use approx::assert_abs_diff_eq;

    fn airfoil() -> Segment<2> {
        let (s, c) = (-8.0_f64).to_radians().sin_cos();
        Segment::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(c, s),
            Vector2::new(15.0, -4.87),
            Vector2::new(0.0, 0.0),
        )
        .unwrap()
    }

    fn straight() -> Segment<2> {
        Segment::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::zeros(),
            Vector2::zeros(),
        )
        .unwrap()
    }

    fn helix_piece() -> Segment<3> {
        Segment::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.5),
            Vector3::new(0.0, 1.5, 0.5),
            Vector3::new(-1.5, 0.0, 0.5),
            Vector3::new(-2.0, 0.0, 0.0),
            Vector3::new(0.0, -2.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn interpolates_positions() {
        let seg = airfoil();
        assert_abs_diff_eq!(seg.evaluate(0.0), *seg.p0(), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.evaluate(1.0), *seg.p1(), epsilon = 1e-12);
    }

    #[test]
    fn interpolates_derivatives() {
        let seg = helix_piece();
        assert_abs_diff_eq!(seg.derivative(0.0), *seg.v0(), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.derivative(1.0), *seg.v1(), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.second_derivative(0.0), *seg.a0(), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.second_derivative(1.0), *seg.a1(), epsilon = 1e-12);
    }

    #[test]
    fn closed_form_coefficients() {
        // c3 = 10Δp - 6v0 - 4v1 - 1.5a0 + 0.5a1 etc. for a 1D segment.
        let seg = Segment::new(
            Vector1::new(0.0),
            Vector1::new(1.0),
            Vector1::new(0.0),
            Vector1::new(0.0),
            Vector1::new(0.0),
            Vector1::new(0.0),
        )
        .unwrap();
        let row = seg.coefficients().row(0);
        let expected = [0.0, 0.0, 0.0, 10.0, -15.0, 6.0];
        for (c, e) in row.iter().zip(expected) {
            assert!((c - e).abs() < 1e-10, "coefficient {c} != {e}");
        }
    }

    #[test]
    fn blended_form_agrees_with_coefficients() {
        let seg = helix_piece();
        for k in 0..=20 {
            let t = f64::from(k) / 20.0;
            assert_abs_diff_eq!(seg.evaluate(t), seg.evaluate_blended(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let seg = straight();
        assert_abs_diff_eq!(seg.evaluate(2.0), Vector2::new(2.0, 0.0), epsilon = 1e-10);
    }

    #[test]
    fn from_slices_rejects_shape_mismatch() {
        let err = Segment::<2>::from_slices(
            &[0.0, 0.0],
            &[1.0, 0.0],
            &[1.0, 0.0, 0.0],
            &[1.0, 0.0],
            &[0.0, 0.0],
            &[0.0, 0.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HermiteError::Geometry(GeometryError::ShapeMismatch {
                argument: "v0",
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn from_slices_builds_segment() {
        let seg = Segment::<3>::from_slices(
            &[0.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0],
            &[1.0, 0.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[0.0; 3],
            &[0.0; 3],
        )
        .unwrap();
        assert_eq!(seg.dim(), 3);
        assert_abs_diff_eq!(seg.evaluate(1.0), Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn four_dimensions_unsupported() {
        let z = VectorN::<4>::zeros();
        let err = Segment::new(z, z, z, z, z, z).unwrap_err();
        assert!(matches!(
            err,
            HermiteError::Geometry(GeometryError::UnsupportedDimension(4))
        ));
    }

    #[test]
    fn nan_control_rejected() {
        let z = Vector2::zeros();
        let err = Segment::new(z, z, z, z, Vector2::new(0.0, f64::NAN), z).unwrap_err();
        assert!(matches!(
            err,
            HermiteError::Geometry(GeometryError::NonFinite("a0"))
        ));
    }

    #[test]
    fn sample_returns_requested_count_with_endpoints() {
        let seg = airfoil();
        let points = seg.sample(200);
        assert_eq!(points.len(), 200);
        assert_abs_diff_eq!(points[0], *seg.p0(), epsilon = 1e-12);
        assert_abs_diff_eq!(points[199], *seg.p1(), epsilon = 1e-12);
    }

    #[test]
    fn sample_parameters_are_monotone() {
        let ts = helix_piece().sample_parameters(150);
        assert_eq!(ts.len(), 150);
        assert!(ts[0].abs() < 1e-15);
        assert!((ts[149] - 1.0).abs() < 1e-15);
        assert!(ts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn straight_segment_is_sampled_uniformly() {
        let points = straight().sample(11);
        for (i, p) in points.iter().enumerate() {
            let expected = f64::from(u32::try_from(i).unwrap()) / 10.0;
            assert!((p.x - expected).abs() < 5e-3, "x[{i}] = {}", p.x);
            assert!(p.y.abs() < 1e-12);
        }
    }

    #[test]
    fn samples_cluster_at_high_curvature() {
        let ts = airfoil().sample_parameters(100);
        let gaps: Vec<f64> = ts.windows(2).map(|w| w[1] - w[0]).collect();
        let min = gaps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = gaps.iter().copied().fold(0.0, f64::max);
        assert!(max > 1.5 * min, "gaps too even: {min}..{max}");
        // The nose near t = 0 bends hardest.
        assert!(gaps[0] < gaps[gaps.len() - 1]);
    }

    #[test]
    fn one_dimensional_segment_samples_uniformly() {
        let seg = Segment::new(
            Vector1::new(0.0),
            Vector1::new(4.0),
            Vector1::new(0.0),
            Vector1::new(0.0),
            Vector1::new(3.0),
            Vector1::new(-3.0),
        )
        .unwrap();
        assert!(seg.curvature(0.4).abs() < f64::EPSILON);
        let ts = seg.sample_parameters(5);
        for (t, e) in ts.iter().zip([0.0, 0.25, 0.5, 0.75, 1.0]) {
            assert!((t - e).abs() < 5e-3);
        }
    }

    #[test]
    fn sample_with_validates_params() {
        let params = SamplingParams {
            grid_resolution: 0,
            ..SamplingParams::default()
        };
        assert!(airfoil().sample_with(10, &params).is_err());
        let coarse = SamplingParams {
            grid_resolution: 50,
            ..SamplingParams::default()
        };
        assert_eq!(airfoil().sample_with(10, &coarse).unwrap().len(), 10);
    }

    #[test]
    fn display_reports_controls() {
        let text = straight().to_string();
        assert!(text.contains("Quintic Hermite segment (2D)"));
        assert!(text.contains("p1: [1.0, 0.0]"));
    }
}
