//! The closed set of function kinds and their registry metadata.
//!
//! Each kind carries a stable wire token (its uppercase name — part of the
//! persisted format, never renamed), a canonical default parameter list,
//! and a capability classification: overlay kinds attach to price/volume
//! charts, indicator kinds stand alone as an indicator chart's base.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::function::Function;
use super::FunctionError;

/// Identifier for every indicator/overlay function the registry knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// Simple moving average — overlay, single track.
    Sma,
    /// Exponential moving average — overlay, single track.
    Ema,
    /// Kaufman adaptive moving average — overlay, single track.
    Kama,
    /// Bollinger bands — overlay, two bands.
    Band,
    /// Parabolic stop-and-reverse — overlay, single dotted track.
    Psar,
    /// Relative strength index — indicator, single track.
    Rsi,
    /// Momentum — indicator, single track.
    Mom,
    /// MACD — indicator, paired line + signal.
    Macd,
}

impl FunctionKind {
    /// Every kind, in declaration order.
    pub const ALL: [FunctionKind; 8] = [
        FunctionKind::Sma,
        FunctionKind::Ema,
        FunctionKind::Kama,
        FunctionKind::Band,
        FunctionKind::Psar,
        FunctionKind::Rsi,
        FunctionKind::Mom,
        FunctionKind::Macd,
    ];

    /// Canonical wire token. Persisted — must stay byte-stable.
    pub fn token(&self) -> &'static str {
        match self {
            FunctionKind::Sma => "SMA",
            FunctionKind::Ema => "EMA",
            FunctionKind::Kama => "KAMA",
            FunctionKind::Band => "BAND",
            FunctionKind::Psar => "PSAR",
            FunctionKind::Rsi => "RSI",
            FunctionKind::Mom => "MOM",
            FunctionKind::Macd => "MACD",
        }
    }

    /// Look a kind up by its wire token (case-sensitive).
    pub fn from_token(token: &str) -> Result<FunctionKind, FunctionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.token() == token)
            .ok_or_else(|| FunctionError::UnknownKind(token.to_string()))
    }

    /// Canonical default parameters, in the kind's declared order.
    pub fn default_params(&self) -> Vec<f64> {
        match self {
            FunctionKind::Sma | FunctionKind::Ema => vec![20.0],
            FunctionKind::Kama | FunctionKind::Mom => vec![10.0],
            FunctionKind::Band => vec![20.0, 2.0],
            FunctionKind::Psar => vec![0.02, 0.2],
            FunctionKind::Rsi => vec![14.0],
            FunctionKind::Macd => vec![12.0, 26.0, 9.0],
        }
    }

    /// Number of parameters the kind requires.
    pub fn arity(&self) -> usize {
        self.default_params().len()
    }

    /// Can this kind stand alone as an indicator chart's base?
    pub fn is_indicator(&self) -> bool {
        matches!(self, FunctionKind::Rsi | FunctionKind::Mom | FunctionKind::Macd)
    }

    /// Can this kind be drawn on top of a price/volume chart?
    pub fn is_overlay(&self) -> bool {
        !self.is_indicator()
    }

    /// Factory: a fresh instance in its default parameter state.
    pub fn create(&self) -> Function {
        Function::new(*self)
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
