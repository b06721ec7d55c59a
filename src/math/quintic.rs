//! Quintic Hermite boundary system and blending functions.
use super::Matrix6;

/// Boundary matrix mapping monomial coefficients `[c0..c5]` to the
/// constraints `[p0, v0, a0, p1, v1, a1]`.
///
/// Rows are the position, first and second derivative bases evaluated at
/// `t = 0` followed by the same three at `t = 1`.
#[must_use]
#[rustfmt::skip]
pub fn boundary_matrix() -> Matrix6 {
    Matrix6::new(
        1.0, 0.0, 0.0, 0.0,  0.0,  0.0,
        0.0, 1.0, 0.0, 0.0,  0.0,  0.0,
        0.0, 0.0, 2.0, 0.0,  0.0,  0.0,
        1.0, 1.0, 1.0, 1.0,  1.0,  1.0,
        0.0, 1.0, 2.0, 3.0,  4.0,  5.0,
        0.0, 0.0, 2.0, 6.0, 12.0, 20.0,
    )
}

/// The six quintic Hermite blending functions at `t`.
///
/// Weights are ordered `[p0, v0, a0, p1, v1, a1]`, so a point on the
/// segment is the weighted sum of its six controls.
#[must_use]
pub fn basis_weights(t: f64) -> [f64; 6] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    [
        1.0 - 10.0 * t3 + 15.0 * t4 - 6.0 * t5,
        t - 6.0 * t3 + 8.0 * t4 - 3.0 * t5,
        0.5 * t2 - 1.5 * t3 + 1.5 * t4 - 0.5 * t5,
        10.0 * t3 - 15.0 * t4 + 6.0 * t5,
        -4.0 * t3 + 7.0 * t4 - 3.0 * t5,
        0.5 * t3 - t4 + 0.5 * t5,
    ]
}
