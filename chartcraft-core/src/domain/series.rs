//! Validated price series — the input every chart render works from.
//!
//! Construction enforces the provider contract: bars strictly ordered by
//! date, no duplicate dates. Everything downstream can then index tracks
//! positionally without re-checking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bar::Bar;

/// Errors raised while validating provider data.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("bars not ordered by date at index {0}")]
    UnorderedDates(usize),
    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),
}

/// An ordered, date-unique series of OHLCV bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Validate and wrap a bar list. An empty list is a valid empty series.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].date == pair[0].date {
                return Err(SeriesError::DuplicateDate(pair[1].date));
            }
            if pair[1].date < pair[0].date {
                return Err(SeriesError::UnorderedDates(i + 1));
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Close track, aligned to `dates()`.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volume track, aligned to `dates()`.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}
