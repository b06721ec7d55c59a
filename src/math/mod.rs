pub mod curvature;
pub mod interp;
pub mod monomial;
pub mod quintic;

/// Vector with `D` real components.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// 1D vector type.
pub type Vector1 = nalgebra::Vector1<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Six-component vector used for the quintic monomial bases.
pub type Vector6 = nalgebra::Vector6<f64>;

/// 6x6 matrix of the quintic boundary system.
pub type Matrix6 = nalgebra::Matrix6<f64>;

/// Default absolute tolerance for joint continuity checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Guards the curvature denominator against near-zero speed.
pub const SPEED_EPSILON: f64 = 1e-8;
