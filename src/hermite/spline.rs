use crate::error::{CompositionError, Result};
use crate::math::VectorN;
use crate::sampling::{largest_remainder, DEFAULT_SAMPLES_PER_SEGMENT, MIN_POINTS_PER_SEGMENT};

use super::continuity::ensure_c2_chain;
use super::waypoint::resolve_controls;
use super::{CurveDomain, ParametricCurve, Segment, Tangent, Waypoint};

/// An ordered, non-empty chain of quintic Hermite segments joined with C²
/// continuity.
///
/// The spline keeps a cached sample array that is rebuilt in full whenever
/// its segments change.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline<const D: usize> {
    segments: Vec<Segment<D>>,
    samples: Vec<VectorN<D>>,
    samples_per_segment: usize,
}

impl<const D: usize> Spline<D> {
    /// Creates a single-segment spline.
    #[must_use]
    pub fn from_segment(segment: Segment<D>) -> Self {
        Self::with_segments(vec![segment])
    }

    /// Builds one segment per adjacent pair of waypoints.
    ///
    /// Neighbouring segments share their joint controls, so the result is C²
    /// continuous by construction. Missing curvatures default to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::LengthMismatch`] if the lists differ in
    /// length, [`CompositionError::TooFewControls`] for fewer than two
    /// waypoints, or any tangent or segment construction error.
    pub fn from_controls(
        points: &[VectorN<D>],
        tangents: &[Tangent<D>],
        curvatures: Option<&[VectorN<D>]>,
    ) -> Result<Self> {
        let waypoints = resolve_controls(points, tangents, curvatures)?;
        let segments = waypoints
            .windows(2)
            .map(|pair| Segment::between(&pair[0], &pair[1]))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(segments = segments.len(), "built spline from controls");
        Ok(Self::with_segments(segments))
    }

    /// Composes pre-built segments, checking every joint for C² continuity.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::Empty`] for no segments and
    /// [`CompositionError::Continuity`] naming the first pair whose
    /// position, tangent or curvature differ by more than `tolerance`.
    pub fn from_segments(segments: Vec<Segment<D>>, tolerance: f64) -> Result<Self> {
        if segments.is_empty() {
            return Err(CompositionError::Empty.into());
        }
        ensure_c2_chain(
            segments.windows(2).map(|pair| (pair[0].end(), pair[1].start())),
            tolerance,
        )?;
        tracing::debug!(segments = segments.len(), "composed spline from segments");
        Ok(Self::with_segments(segments))
    }

    fn with_segments(segments: Vec<Segment<D>>) -> Self {
        let mut spline = Self {
            segments,
            samples: Vec::new(),
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        };
        spline.resample(DEFAULT_SAMPLES_PER_SEGMENT);
        spline
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<D>] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the controls at the start of the first segment.
    #[must_use]
    pub fn start(&self) -> Waypoint<D> {
        self.segments[0].start()
    }

    /// Returns the controls at the end of the last segment.
    #[must_use]
    pub fn end(&self) -> Waypoint<D> {
        self.segments[self.segments.len() - 1].end()
    }

    /// Returns all waypoints: each segment's start plus the final end.
    #[must_use]
    pub fn waypoints(&self) -> Vec<Waypoint<D>> {
        self.segments
            .iter()
            .map(Segment::start)
            .chain(std::iter::once(self.end()))
            .collect()
    }

    /// Returns the cached samples from the last resample.
    #[must_use]
    pub fn samples(&self) -> &[VectorN<D>] {
        &self.samples
    }

    /// Rebuilds the sample cache with `samples_per_segment` adaptive points
    /// per segment and returns it.
    pub fn resample(&mut self, samples_per_segment: usize) -> &[VectorN<D>] {
        self.samples_per_segment = samples_per_segment;
        self.samples = self
            .segments
            .iter()
            .flat_map(|segment| segment.sample(samples_per_segment))
            .collect();
        tracing::debug!(
            segments = self.segments.len(),
            samples = self.samples.len(),
            "resampled spline"
        );
        &self.samples
    }

    /// Samples every segment and concatenates the results.
    ///
    /// With `None` each segment gets [`DEFAULT_SAMPLES_PER_SEGMENT`] points.
    /// With `Some(n)` the `n` points are apportioned by each segment's peak
    /// endpoint curvature `max(‖a0‖, ‖a1‖)`, evenly if all are zero, with a
    /// floor of [`MIN_POINTS_PER_SEGMENT`] per segment.
    ///
    /// Shared joint points are kept, so the point at each joint appears
    /// twice in the output.
    #[must_use]
    pub fn sample(&self, n: Option<usize>) -> Vec<VectorN<D>> {
        let counts = match n {
            None => vec![DEFAULT_SAMPLES_PER_SEGMENT; self.segments.len()],
            Some(total) => {
                let weights: Vec<f64> = self
                    .segments
                    .iter()
                    .map(Segment::peak_endpoint_curvature)
                    .collect();
                largest_remainder(&weights, total)
                    .into_iter()
                    .map(|count| count.max(MIN_POINTS_PER_SEGMENT))
                    .collect()
            }
        };
        self.segments
            .iter()
            .zip(counts)
            .flat_map(|(segment, count)| segment.sample(count))
            .collect()
    }

    /// Adds a waypoint.
    ///
    /// With `index = None` a segment from the current end to the new
    /// waypoint is appended. With `Some(index)` for `1 <= index <=
    /// segment_count()`, segment `index - 1` is replaced by two segments
    /// running through the new waypoint, which becomes waypoint `index`.
    /// The spline is unchanged if an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::IndexOutOfRange`] for index 0 or an index
    /// past the last segment, or any tangent or segment construction error.
    pub fn add_point(
        &mut self,
        point: VectorN<D>,
        tangent: Tangent<D>,
        curvature: Option<VectorN<D>>,
        index: Option<usize>,
    ) -> Result<()> {
        let waypoint = Waypoint::resolve(point, tangent, curvature)?;
        match index {
            None => {
                let segment = Segment::between(&self.end(), &waypoint)?;
                self.segments.push(segment);
            }
            Some(index) => {
                let max = self.segments.len();
                if index == 0 || index > max {
                    return Err(CompositionError::IndexOutOfRange { index, max }.into());
                }
                let split = &self.segments[index - 1];
                let first = Segment::between(&split.start(), &waypoint)?;
                let second = Segment::between(&waypoint, &split.end())?;
                self.segments[index - 1] = first;
                self.segments.insert(index, second);
            }
        }
        tracing::debug!(?index, segments = self.segments.len(), "added waypoint to spline");
        self.resample(self.samples_per_segment);
        Ok(())
    }

    /// Maps a global parameter to a segment and its local parameter.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn locate(&self, t: f64) -> (&Segment<D>, f64) {
        let last = self.segments.len() - 1;
        let index = if t > 0.0 {
            (t.floor() as usize).min(last)
        } else {
            0
        };
        (&self.segments[index], t - index as f64)
    }
}

/// Global parameterisation: segment `i` covers `[i, i + 1]`.
impl<const D: usize> ParametricCurve<D> for Spline<D> {
    fn evaluate(&self, t: f64) -> VectorN<D> {
        let (segment, local) = self.locate(t);
        segment.evaluate(local)
    }

    fn derivative(&self, t: f64) -> VectorN<D> {
        let (segment, local) = self.locate(t);
        segment.derivative(local)
    }

    fn second_derivative(&self, t: f64) -> VectorN<D> {
        let (segment, local) = self.locate(t);
        segment.second_derivative(local)
    }

    #[allow(clippy::cast_precision_loss)]
    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.segments.len() as f64)
    }
}
