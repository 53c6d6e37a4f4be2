//! Relative Strength Index (RSI).
//!
//! Wilder smoothing of average gains and average losses.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! First valid value at index `period`.
//! Edge cases: avg_loss == 0 -> 100; avg_gain == 0 -> 0.

/// Compute the RSI of `values` over `period`.
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period + 1 {
        return result;
    }

    // Seed: average gain/loss over the first `period` changes
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let ch = values[i] - values[i - 1];
        if ch.is_nan() {
            return result; // NaN change taints the recursion
        }
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss += -ch;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    result[period] = rsi_value(avg_gain, avg_loss);

    for i in (period + 1)..n {
        let ch = values[i] - values[i - 1];
        if ch.is_nan() {
            return result;
        }
        let gain = if ch > 0.0 { ch } else { 0.0 };
        let loss = if ch < 0.0 { -ch } else { 0.0 };

        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;

        result[i] = rsi_value(avg_gain, avg_loss);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    if avg_gain == 0.0 {
        return 0.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
