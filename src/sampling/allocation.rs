/// Splits `total` into `parts` counts that differ by at most one.
///
/// The first `total % parts` entries receive the extra point.
#[must_use]
pub fn even_split(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + usize::from(i < extra)).collect()
}

/// Apportions `total` proportionally to `weights` with the largest-remainder
/// method, so the counts sum to exactly `total`.
///
/// Ties in the fractional remainder go to the earlier entry. When the weights
/// have no positive finite mass the split is even.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn largest_remainder(weights: &[f64], total: usize) -> Vec<usize> {
    let mass: f64 = weights.iter().filter(|w| w.is_finite() && **w > 0.0).sum();
    if !(mass > 0.0 && mass.is_finite()) {
        return even_split(total, weights.len());
    }

    let quotas: Vec<f64> = weights
        .iter()
        .map(|&w| {
            if w.is_finite() && w > 0.0 {
                w * total as f64 / mass
            } else {
                0.0
            }
        })
        .collect();
    let mut counts: Vec<usize> = quotas.iter().map(|q| q.floor() as usize).collect();
    let assigned: usize = counts.iter().sum();

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = quotas[a] - quotas[a].floor();
        let fb = quotas[b] - quotas[b].floor();
        fb.total_cmp(&fa).then(a.cmp(&b))
    });
    for &i in order.iter().take(total.saturating_sub(assigned)) {
        counts[i] += 1;
    }
    counts
}
