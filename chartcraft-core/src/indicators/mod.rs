//! Indicator math — pure functions over a single numeric track.
//!
//! Every computation takes one source track (closes for price charts,
//! volumes for volume charts) and returns output aligned 1:1 with the
//! input. Warmup positions are `f64::NAN`.
//!
//! Multi-track results (Bollinger bands, MACD) come back as tuples; the
//! chart layer wraps them into [`ValueSeries`] shapes for rendering.

pub mod bollinger;
pub mod ema;
pub mod kama;
pub mod macd;
pub mod momentum;
pub mod psar;
pub mod rsi;
pub mod sma;

pub use bollinger::bollinger;
pub use ema::ema;
pub use kama::kama;
pub use macd::macd;
pub use momentum::momentum;
pub use psar::psar;
pub use rsi::rsi;
pub use sma::sma;

/// A computed series in one of the three renderable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSeries {
    /// One track per date (SMA, EMA, KAMA, PSAR, RSI, MOM).
    Single(Vec<f64>),
    /// Two related tracks per date (MACD line + signal line).
    Paired { first: Vec<f64>, second: Vec<f64> },
    /// Two or three aligned bands per date (Bollinger upper/lower).
    Banded { bands: Vec<Vec<f64>> },
}

impl ValueSeries {
    /// Number of dates covered (all tracks in a shape share one length).
    pub fn len(&self) -> usize {
        match self {
            ValueSeries::Single(v) => v.len(),
            ValueSeries::Paired { first, .. } => first.len(),
            ValueSeries::Banded { bands } => bands.first().map_or(0, Vec::len),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
