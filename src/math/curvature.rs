use super::{Vector3, VectorN};

/// Magnitude of the cross product `d1 × d2`.
///
/// The 2D cross product is the scalar `x1·y2 − y1·x2`; in 3D it is the norm
/// of the vector product. Any other dimension has no bending and yields 0.
#[must_use]
pub fn cross_magnitude<const D: usize>(d1: &VectorN<D>, d2: &VectorN<D>) -> f64 {
    match D {
        2 => (d1[0] * d2[1] - d1[1] * d2[0]).abs(),
        3 => {
            let a = Vector3::new(d1[0], d1[1], d1[2]);
            let b = Vector3::new(d2[0], d2[1], d2[2]);
            a.cross(&b).norm()
        }
        _ => 0.0,
    }
}

/// Curvature of a parametric curve from its first and second derivatives:
/// `‖d1 × d2‖ / (‖d1‖³ + epsilon)`.
///
/// Always 0 for 1D curves.
#[must_use]
pub fn curvature_magnitude<const D: usize>(d1: &VectorN<D>, d2: &VectorN<D>, epsilon: f64) -> f64 {
    if D < 2 {
        return 0.0;
    }
    let speed = d1.norm();
    cross_magnitude(d1, d2) / (speed * speed * speed + epsilon)
}
