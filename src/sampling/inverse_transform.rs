use crate::math::interp::{interp, linspace, normalized_cumsum};

use super::SamplingParams;

/// Draws `n` parameters from `grid` with density proportional to
/// `density + baseline`, by inverting the empirical CDF.
///
/// `grid` must be ascending and the same length as `density`. The baseline is
/// `baseline_fraction * max(density)` when any density is positive and
/// `flat_baseline` otherwise, so every grid cell keeps a non-zero share.
/// Targets `u` are evenly spaced over `[0, 1]`, hence the first parameter is
/// `grid[0]` and the last is `grid[last]`.
#[must_use]
pub fn inverse_transform_parameters(
    grid: &[f64],
    density: &[f64],
    n: usize,
    params: &SamplingParams,
) -> Vec<f64> {
    let peak = density.iter().copied().fold(0.0, f64::max);
    let baseline = if peak > 0.0 {
        params.baseline_fraction * peak
    } else {
        params.flat_baseline
    };
    let weights: Vec<f64> = density.iter().map(|k| k + baseline).collect();
    let cdf = normalized_cumsum(&weights);

    let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
        return Vec::new();
    };
    if cdf.is_empty() {
        return linspace(first, last, n);
    }

    linspace(0.0, 1.0, n)
        .into_iter()
        .map(|u| interp(u, &cdf, grid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<f64> {
        linspace(0.0, 1.0, 500)
    }

    #[test]
    fn flat_density_is_uniform() {
        let grid = grid();
        let density = vec![0.0; grid.len()];
        let ts = inverse_transform_parameters(&grid, &density, 11, &SamplingParams::default());
        assert_eq!(ts.len(), 11);
        assert!(ts[0].abs() < 1e-12);
        assert!((ts[10] - 1.0).abs() < 1e-12);
        let gaps: Vec<f64> = ts.windows(2).map(|w| w[1] - w[0]).collect();
        let (min, max) = gaps
            .iter()
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), g| (lo.min(*g), hi.max(*g)));
        // Grid-cell quantisation is the only source of spread.
        assert!(max - min < 5e-3, "gaps spread {min}..{max}");
    }

    #[test]
    fn dense_where_density_is_high() {
        let grid = grid();
        let density: Vec<f64> = grid.iter().map(|&t| if t < 0.2 { 10.0 } else { 0.0 }).collect();
        let ts = inverse_transform_parameters(&grid, &density, 101, &SamplingParams::default());
        let early = ts.iter().filter(|&&t| t < 0.2).count();
        assert!(early > 80, "only {early} of 101 samples in the dense region");
    }

    #[test]
    fn parameters_are_monotone_and_span_grid() {
        let grid = grid();
        let density: Vec<f64> = grid.iter().map(|t| (t * 9.0).sin().abs()).collect();
        let ts = inverse_transform_parameters(&grid, &density, 64, &SamplingParams::default());
        assert!(ts.windows(2).all(|w| w[0] <= w[1]));
        assert!(ts[0].abs() < 1e-12);
        assert!((ts[63] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_requested_points() {
        let grid = grid();
        let density = vec![1.0; grid.len()];
        assert!(inverse_transform_parameters(&grid, &density, 0, &SamplingParams::default()).is_empty());
    }
}
