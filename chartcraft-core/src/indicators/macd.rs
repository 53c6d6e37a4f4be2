//! Moving Average Convergence/Divergence (MACD).
//!
//! MACD line: EMA(fast) - EMA(slow).
//! Signal line: EMA(signal) of the MACD line, seeded past the warmup prefix.
//! First valid MACD value at index slow - 1; signal lags it by signal - 1.

use super::ema::ema;

/// Compute the (macd_line, signal_line) pair of `values`.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> (Vec<f64>, Vec<f64>) {
    let n = values.len();

    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let mut line = vec![f64::NAN; n];
    for i in 0..n {
        if !fast_ema[i].is_nan() && !slow_ema[i].is_nan() {
            line[i] = fast_ema[i] - slow_ema[i];
        }
    }

    // Signal: EMA over the valid suffix of the MACD line
    let mut signal_line = vec![f64::NAN; n];
    if let Some(start) = line.iter().position(|v| !v.is_nan()) {
        let tail = ema(&line[start..], signal);
        signal_line[start..].copy_from_slice(&tail);
    }

    (line, signal_line)
}
