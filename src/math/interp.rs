//! Grid and lookup helpers for inverse-transform sampling.

/// Returns `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// `n = 0` yields an empty grid and `n = 1` yields `[start]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Running sum of `weights`, normalized so the last entry is exactly 1.
///
/// Returns an empty vector when the weights are empty or do not sum to a
/// positive finite value.
#[must_use]
pub fn normalized_cumsum(weights: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    let mut cdf: Vec<f64> = weights
        .iter()
        .map(|w| {
            acc += w;
            acc
        })
        .collect();
    if !(acc.is_finite() && acc > 0.0) {
        return Vec::new();
    }
    for value in &mut cdf {
        *value /= acc;
    }
    if let Some(last) = cdf.last_mut() {
        *last = 1.0;
    }
    cdf
}

/// Piecewise-linear interpolation of `(xp, fp)` at `x`.
///
/// `xp` must be non-decreasing and the same length as `fp`. Values of `x`
/// outside `[xp[0], xp[last]]` clamp to the first or last `fp`.
#[must_use]
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }
    // First index with xp > x; guaranteed in 1..n by the clamps above.
    let hi = xp[..n].partition_point(|&v| v <= x);
    let lo = hi - 1;
    let span = xp[hi] - xp[lo];
    if span <= 0.0 {
        return fp[lo];
    }
    fp[lo] + (fp[hi] - fp[lo]) * (x - xp[lo]) / span
}
