/// Relative strength index with Wilder smoothing, on a 0–100 scale.
///
/// Index 0 has no change to measure, so the first reading lands at
/// `window`, seeded with the plain mean of the first `window` gains and
/// losses. A window with no losses reads 100, no movement at all reads 50.
pub fn rsi(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() <= window {
        return out;
    }

    let w = window as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..=window {
        let (gain, loss) = split_change(values[i] - values[i - 1]);
        avg_gain += gain;
        avg_loss += loss;
    }
    avg_gain /= w;
    avg_loss /= w;
    out[window] = Some(strength(avg_gain, avg_loss));

    for i in window + 1..values.len() {
        let (gain, loss) = split_change(values[i] - values[i - 1]);
        avg_gain = (avg_gain * (w - 1.0) + gain) / w;
        avg_loss = (avg_loss * (w - 1.0) + loss) / w;
        out[i] = Some(strength(avg_gain, avg_loss));
    }

    out
}

fn split_change(change: f64) -> (f64, f64) {
    if change > 0.0 {
        (change, 0.0)
    } else {
        (0.0, -change)
    }
}

fn strength(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
