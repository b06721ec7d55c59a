use crate::error::{CompositionError, Result};
use crate::math::VectorN;
use crate::sampling::{even_split, DEFAULT_SAMPLES_PER_SEGMENT};

use super::continuity::ensure_c2_chain;
use super::waypoint::resolve_controls;
use super::{Segment, Spline, Tangent, Waypoint};

/// A sequence of splines, each normally spanning one pair of adjacent
/// waypoints, with a cached sample array that is never stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<const D: usize> {
    splines: Vec<Spline<D>>,
    samples: Vec<VectorN<D>>,
    samples_per_spline: usize,
}

impl<const D: usize> Curve<D> {
    /// Starts a curve from a single spline.
    #[must_use]
    pub fn new(initial: Spline<D>) -> Self {
        Self::with_splines(vec![initial])
    }

    /// Builds one two-waypoint spline per adjacent pair of waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::LengthMismatch`] if the
    /// lists differ in length, or any tangent or segment construction error.
    pub fn from_controls(
        points: &[VectorN<D>],
        tangents: &[Tangent<D>],
        curvatures: Option<&[VectorN<D>]>,
    ) -> Result<Self> {
        let waypoints = resolve_controls(points, tangents, curvatures)?;
        let splines = waypoints
            .windows(2)
            .map(|pair| Segment::between(&pair[0], &pair[1]).map(Spline::from_segment))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(splines = splines.len(), "built curve from controls");
        Ok(Self::with_splines(splines))
    }

    /// Composes independently built splines, checking that each spline's end
    /// controls match the next spline's start controls.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::Empty`] for no splines and
    /// [`CompositionError::Continuity`] naming the first
    /// offending pair.
    pub fn from_splines(splines: Vec<Spline<D>>, tolerance: f64) -> Result<Self> {
        if splines.is_empty() {
            return Err(CompositionError::Empty.into());
        }
        ensure_c2_chain(
            splines.windows(2).map(|pair| (pair[0].end(), pair[1].start())),
            tolerance,
        )?;
        tracing::debug!(splines = splines.len(), "composed curve from splines");
        Ok(Self::with_splines(splines))
    }

    fn with_splines(splines: Vec<Spline<D>>) -> Self {
        let mut curve = Self {
            splines,
            samples: Vec::new(),
            samples_per_spline: DEFAULT_SAMPLES_PER_SEGMENT,
        };
        curve.resample(DEFAULT_SAMPLES_PER_SEGMENT);
        curve
    }

    /// Returns the splines in order.
    #[must_use]
    pub fn splines(&self) -> &[Spline<D>] {
        &self.splines
    }

    /// Returns the number of splines.
    #[must_use]
    pub fn spline_count(&self) -> usize {
        self.splines.len()
    }

    /// Returns the controls at the end of the last spline.
    #[must_use]
    pub fn end(&self) -> Waypoint<D> {
        self.splines[self.splines.len() - 1].end()
    }

    /// Returns the cached samples, one block per spline.
    #[must_use]
    pub fn samples(&self) -> &[VectorN<D>] {
        &self.samples
    }

    /// Extends the curve with a single-segment spline from the current end
    /// to the new waypoint, then resamples at the last used density.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent cannot be resolved or the segment
    /// cannot be built. The curve is unchanged in that case.
    pub fn add_point(
        &mut self,
        point: VectorN<D>,
        tangent: Tangent<D>,
        curvature: Option<VectorN<D>>,
    ) -> Result<()> {
        let waypoint = Waypoint::resolve(point, tangent, curvature)?;
        let segment = Segment::between(&self.end(), &waypoint)?;
        self.splines.push(Spline::from_segment(segment));
        tracing::debug!(splines = self.splines.len(), "added waypoint to curve");
        self.resample(self.samples_per_spline);
        Ok(())
    }

    /// Resamples every spline with `samples_per_spline` points per segment
    /// and rebuilds the curve cache by concatenation.
    pub fn resample(&mut self, samples_per_spline: usize) -> &[VectorN<D>] {
        self.samples_per_spline = samples_per_spline;
        for spline in &mut self.splines {
            spline.resample(samples_per_spline);
        }
        self.samples = self
            .splines
            .iter()
            .flat_map(|spline| spline.samples().iter().copied())
            .collect();
        tracing::debug!(
            splines = self.splines.len(),
            samples = self.samples.len(),
            "resampled curve"
        );
        &self.samples
    }

    /// Samples `n` points spread evenly across the splines.
    ///
    /// Spline `i` receives `n / k` points, plus one for the first `n % k`
    /// splines. Every spline after the first drops its leading point, which
    /// coincides with the previous spline's last point, so a curve of
    /// single-segment splines yields `n - (k - 1)` points when every
    /// allocation is at least two.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<VectorN<D>> {
        let allocation = even_split(n, self.splines.len());
        let mut points = Vec::with_capacity(n);
        for (i, (spline, count)) in self.splines.iter().zip(allocation).enumerate() {
            let block = spline.sample(Some(count));
            let skip = usize::from(i > 0);
            points.extend(block.into_iter().skip(skip));
        }
        points
    }
}
