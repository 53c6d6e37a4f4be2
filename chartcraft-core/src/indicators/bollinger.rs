//! Bollinger bands — moving average +/- standard deviation multiplier.
//!
//! Upper: SMA(period) + mult * stddev(period)
//! Lower: SMA(period) - mult * stddev(period)
//! Uses population stddev (divide by N). First valid value at period - 1.

/// Compute (upper, lower) bands of `values` over `period`.
pub fn bollinger(values: &[f64], period: usize, multiplier: f64) -> (Vec<f64>, Vec<f64>) {
    let period = period.max(1);
    let n = values.len();
    let mut upper = vec![f64::NAN; n];
    let mut lower = vec![f64::NAN; n];

    if n < period {
        return (upper, lower);
    }

    for i in (period - 1)..n {
        let window = &values[(i + 1 - period)..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }

        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let offset = multiplier * variance.sqrt();

        upper[i] = mean + offset;
        lower[i] = mean - offset;
    }

    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn bands_bracket_the_mean() {
        let values = [10.0, 12.0, 14.0, 12.0, 10.0];
        let (upper, lower) = bollinger(&values, 3, 2.0);

        assert!(upper[1].is_nan());
        assert!(lower[1].is_nan());

        // Window [10, 12, 14]: mean 12, population stddev sqrt(8/3)
        let sd = (8.0_f64 / 3.0).sqrt();
        assert_approx(upper[2], 12.0 + 2.0 * sd, DEFAULT_EPSILON);
        assert_approx(lower[2], 12.0 - 2.0 * sd, DEFAULT_EPSILON);
    }

    #[test]
    fn zero_variance_collapses_bands() {
        let values = [5.0; 4];
        let (upper, lower) = bollinger(&values, 2, 2.0);
        assert_approx(upper[3], 5.0, DEFAULT_EPSILON);
        assert_approx(lower[3], 5.0, DEFAULT_EPSILON);
    }

    #[test]
    fn nan_in_window_skips_position() {
        let values = [10.0, f64::NAN, 14.0, 12.0, 10.0];
        let (upper, _) = bollinger(&values, 3, 2.0);
        assert!(upper[2].is_nan());
        assert!(upper[3].is_nan());
        assert!(!upper[4].is_nan());
    }
}
