//! Renderable output — labeled, colored, typed value tracks.
//!
//! The actual pixel rendering lives outside this crate; a `DataSet` is the
//! complete hand-off: one track of values aligned to the chart's dates.

use serde::{Deserialize, Serialize};

use super::colors::Color;

/// How the renderer should draw a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// Solid line (default for overlays and indicator tracks).
    Line,
    /// Dotted line (parabolic SAR).
    Dotted,
    /// Vertical bars (volume base series).
    Bars,
}

/// One drawable track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub label: String,
    pub color: Color,
    pub line_type: LineType,
    pub values: Vec<f64>,
}

impl DataSet {
    pub fn line(label: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color,
            line_type: LineType::Line,
            values,
        }
    }

    pub fn dotted(label: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color,
            line_type: LineType::Dotted,
            values,
        }
    }

    pub fn bars(label: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            color,
            line_type: LineType::Bars,
            values,
        }
    }
}
