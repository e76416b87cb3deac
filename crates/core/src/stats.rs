//! Deterministic numeric helpers.
//!
//! All helpers are plain functions over slices so callers stay
//! value-in/value-out and trivially testable.

/// Arithmetic mean. Empty input yields 0.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Sample standard deviation (n-1), deterministic.
///
/// Fewer than two points has no defined sample variance; this returns 0
/// (zero-variance fallback) so single-observation series behave as
/// constant demand.
pub fn stddev_sample(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let var = xs
        .iter()
        .map(|x| {
            let d = x - m;
            d * d
        })
        .sum::<f64>()
        / ((xs.len() - 1) as f64);
    var.sqrt()
}

/// Degree-1 least-squares fit of `ys` over sequential positions 0..n.
///
/// Returns `(slope, intercept)`. A single observation fits a flat line at
/// that value; an empty series fits the zero line.
pub fn linear_fit(ys: &[f64]) -> (f64, f64) {
    let n = ys.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    if n == 1 {
        return (0.0, ys[0]);
    }

    let nf = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = ys.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..n).map(|i| (i as f64) * (i as f64)).sum();

    let denom = nf * sum_xx - sum_x * sum_x;
    if denom.abs() <= f64::EPSILON {
        return (0.0, mean(ys));
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;
    (slope, intercept)
}
