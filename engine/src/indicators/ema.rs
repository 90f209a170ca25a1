/// Exponential moving average.
///
/// Behaviour:
///   index < window − 1  → None
///   index = window − 1  → simple mean of the first `window` values
///   index ≥ window      → α·x + (1−α)·prev   where α = 2/(window+1)
pub fn ema(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut prev = values[..window].iter().sum::<f64>() / window as f64;
    out[window - 1] = Some(prev);

    for (i, &x) in values.iter().enumerate().skip(window) {
        prev = alpha * x + (1.0 - alpha) * prev;
        out[i] = Some(prev);
    }

    out
}
