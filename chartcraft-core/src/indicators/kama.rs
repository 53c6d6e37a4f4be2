//! Kaufman Adaptive Moving Average (KAMA).
//!
//! Efficiency ratio over the lookback window scales the smoothing constant
//! between a fast (2) and a slow (30) EMA constant.
//! First valid value at index period - 1 (seeded with the raw value).

const FAST_SC: f64 = 2.0 / (2.0 + 1.0);
const SLOW_SC: f64 = 2.0 / (30.0 + 1.0);

/// Compute the KAMA of `values` with an efficiency-ratio window of `period`.
pub fn kama(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n <= period {
        return result;
    }

    for &v in values.iter().take(period) {
        if v.is_nan() {
            return result; // NaN in the seed window taints the recursion
        }
    }

    let mut prev = values[period - 1];
    result[period - 1] = prev;

    for i in period..n {
        if values[i].is_nan() {
            return result;
        }

        let change = (values[i] - values[i - period]).abs();
        let volatility: f64 = ((i + 1 - period)..=i)
            .map(|j| (values[j] - values[j - 1]).abs())
            .sum();
        // Flat window: treat as perfectly efficient rather than dividing by zero
        let er = if volatility == 0.0 {
            1.0
        } else {
            change / volatility
        };
        let sc = (er * (FAST_SC - SLOW_SC) + SLOW_SC).powi(2);

        prev += sc * (values[i] - prev);
        result[i] = prev;
    }

    result
}
