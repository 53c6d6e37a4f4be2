//! Momentum (MOM).
//!
//! Difference against the value `period` positions back.
//! First valid value at index `period`.

/// Compute the momentum of `values` over `period`.
pub fn momentum(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    for i in period..n {
        result[i] = values[i] - values[i - period];
    }

    result
}
