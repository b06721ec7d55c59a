//! Monomial bases `[1, t, t², t³, t⁴, t⁵]` and their first two derivatives.
//!
//! Multiplying a segment's `D x 6` coefficient matrix by one of these
//! vectors yields the position, velocity or acceleration at `t`.
use super::Vector6;

/// Position basis `[1, t, t², t³, t⁴, t⁵]`.
#[must_use]
pub fn position(t: f64) -> Vector6 {
    let t2 = t * t;
    let t3 = t2 * t;
    Vector6::new(1.0, t, t2, t3, t3 * t, t3 * t2)
}

/// First-derivative basis `[0, 1, 2t, 3t², 4t³, 5t⁴]`.
#[must_use]
pub fn velocity(t: f64) -> Vector6 {
    let t2 = t * t;
    let t3 = t2 * t;
    Vector6::new(0.0, 1.0, 2.0 * t, 3.0 * t2, 4.0 * t3, 5.0 * t3 * t)
}

/// Second-derivative basis `[0, 0, 2, 6t, 12t², 20t³]`.
#[must_use]
pub fn acceleration(t: f64) -> Vector6 {
    let t2 = t * t;
    Vector6::new(0.0, 0.0, 2.0, 6.0 * t, 12.0 * t2, 20.0 * t2 * t)
}
