use thiserror::Error;

use crate::hermite::JointQuantity;

/// Top-level error type for quintic Hermite construction and sampling.
#[derive(Debug, Error)]
pub enum HermiteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Errors raised while building a single segment from its controls.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{argument} has {found} components, expected {expected}")]
    ShapeMismatch {
        argument: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unsupported dimension {0}, only 1D, 2D and 3D controls are allowed")]
    UnsupportedDimension(usize),

    #[error("{0} contains a non-finite component")]
    NonFinite(&'static str),

    #[error("angle tangent cannot be resolved in {dim}D")]
    AngleTangent { dim: usize },

    #[error("quintic boundary system is singular")]
    SingularSystem,
}

/// Errors raised while composing segments into splines and splines into curves.
#[derive(Debug, Error)]
pub enum CompositionError {
    #[error(
        "control lists differ in length: {points} points, {tangents} tangents, {curvatures} curvatures"
    )]
    LengthMismatch {
        points: usize,
        tangents: usize,
        curvatures: usize,
    },

    #[error("at least {required} controls are required, got {found}")]
    TooFewControls { required: usize, found: usize },

    #[error("cannot compose an empty sequence")]
    Empty,

    #[error("pieces {first} and {second} are not C2 continuous: {quantity} differs by {deviation:e}")]
    Continuity {
        first: usize,
        second: usize,
        quantity: JointQuantity,
        deviation: f64,
    },

    #[error("insertion index {index} is out of range [1, {max}]")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("continuity tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Errors related to sampling configuration.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`HermiteError`].
pub type Result<T> = std::result::Result<T, HermiteError>;
