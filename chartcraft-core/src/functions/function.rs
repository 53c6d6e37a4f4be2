//! The parameterized function value type and its wire form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::indicators::{bollinger, ema, kama, macd, momentum, psar, rsi, sma, ValueSeries};

use super::kind::FunctionKind;
use super::FunctionError;

/// A function kind plus its ordered scalar parameters.
///
/// Value semantics throughout: `Clone` deep-copies the parameter storage,
/// so a cloned function never aliases its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    kind: FunctionKind,
    params: Vec<f64>,
}

impl Function {
    /// Fresh instance with the kind's canonical defaults.
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            params: kind.default_params(),
        }
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Replace the parameter list wholesale. Partial updates are not a thing:
    /// the caller supplies the full, correctly ordered list.
    pub fn set_params(&mut self, params: Vec<f64>) -> Result<(), FunctionError> {
        if params.len() != self.kind.arity() {
            return Err(FunctionError::MalformedParameter {
                token: self.kind.token().to_string(),
                detail: format!("expected {} parameters, got {}", self.kind.arity(), params.len()),
            });
        }
        if let Some(bad) = params.iter().find(|p| !p.is_finite()) {
            return Err(FunctionError::MalformedParameter {
                token: self.kind.token().to_string(),
                detail: format!("non-finite parameter {bad}"),
            });
        }
        self.params = params;
        Ok(())
    }

    /// Short human label, e.g. `"SMA 50"`. Also used as the data-set label.
    pub fn label(&self) -> String {
        let rendered: Vec<String> = self.params.iter().map(|p| fmt_scalar(*p)).collect();
        format!("{} {}", self.kind.token(), rendered.join(" "))
    }

    /// Compact wire form: `TOKEN(p1,p2,...)`, parens always present.
    pub fn serialize(&self) -> String {
        let rendered: Vec<String> = self.params.iter().map(|p| fmt_scalar(*p)).collect();
        format!("{}({})", self.kind.token(), rendered.join(","))
    }

    /// Parse `TOKEN(p1,p2,...)` back into a function.
    ///
    /// Unknown token -> [`FunctionError::UnknownKind`]; missing parens, bad
    /// arity, or an unparseable scalar -> [`FunctionError::MalformedParameter`].
    pub fn deserialize(text: &str) -> Result<Function, FunctionError> {
        let text = text.trim();
        let (name, rest) = match text.find('(') {
            Some(i) => (&text[..i], &text[i..]),
            None => (text, ""),
        };
        let kind = FunctionKind::from_token(name)?;

        let inner = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(|| FunctionError::MalformedParameter {
                token: kind.token().to_string(),
                detail: "missing parameter list".to_string(),
            })?;

        let params = parse_params(kind, inner)?;
        let mut function = kind.create();
        function.set_params(params)?;
        Ok(function)
    }

    /// Evaluate over one numeric source track.
    ///
    /// Output shape is fixed per kind and aligned 1:1 with the input.
    pub fn eval(&self, track: &[f64]) -> ValueSeries {
        match self.kind {
            FunctionKind::Sma => ValueSeries::Single(sma(track, self.period(0))),
            FunctionKind::Ema => ValueSeries::Single(ema(track, self.period(0))),
            FunctionKind::Kama => ValueSeries::Single(kama(track, self.period(0))),
            FunctionKind::Band => {
                let (upper, lower) = bollinger(track, self.period(0), self.params[1]);
                ValueSeries::Banded {
                    bands: vec![upper, lower],
                }
            }
            FunctionKind::Psar => ValueSeries::Single(psar(track, self.params[0], self.params[1])),
            FunctionKind::Rsi => ValueSeries::Single(rsi(track, self.period(0))),
            FunctionKind::Mom => ValueSeries::Single(momentum(track, self.period(0))),
            FunctionKind::Macd => {
                let (line, signal) =
                    macd(track, self.period(0), self.period(1), self.period(2));
                ValueSeries::Paired {
                    first: line,
                    second: signal,
                }
            }
        }
    }

    /// Parameter at `i` as a window length (rounded, at least 1).
    fn period(&self, i: usize) -> usize {
        (self.params[i].round().max(1.0)) as usize
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

fn parse_params(kind: FunctionKind, inner: &str) -> Result<Vec<f64>, FunctionError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| FunctionError::MalformedParameter {
                    token: kind.token().to_string(),
                    detail: format!("cannot parse {raw:?} as a number"),
                })
        })
        .collect()
}

/// Canonical scalar rendering: integral values print without a decimal
/// point, so `SMA(50)` stays `SMA(50)` across a round trip.
fn fmt_scalar(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
