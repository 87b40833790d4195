//! Reduction passes over the logged durations: mean, sample standard
//! deviation, and the per-night debt against the target.

/// Arithmetic mean. Returns 0.0 for an empty slice; callers guard on
/// emptiness before reporting.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator).
/// Undefined for fewer than two values, hence the Option.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Shortfall against the nightly target, floored at zero.
pub fn sleep_debt(hours: f64, target: f64) -> f64 {
    (target - hours).max(0.0)
}
