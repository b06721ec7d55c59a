pub mod error;
pub mod hermite;
pub mod math;
pub mod sampling;

pub use error::{HermiteError, Result};
pub use hermite::{Curve, CurveDomain, ParametricCurve, Segment, Spline, Tangent, Waypoint};
pub use sampling::SamplingParams;
