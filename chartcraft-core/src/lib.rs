//! ChartCraft Core — configurable stock chart model and text codec.
//!
//! The heart of the crate is the configuration model, not pixel drawing:
//! - A closed registry of function kinds (overlays and indicators), each
//!   with its own default parameter set and capabilities
//! - The chart model: a price/volume/indicator base decorated with an
//!   ordered overlay list and an order-dependent color assignment walk
//! - A compact, byte-stable text codec for persisting configurations
//! - Per-kind indicator math producing single, paired, or banded tracks
//!
//! Rendering and data retrieval are external: the crate consumes a
//! validated [`domain::PriceSeries`] and produces labeled, colored
//! [`charts::DataSet`] tracks for some other layer to draw.

pub mod charts;
pub mod domain;
pub mod functions;
pub mod indicators;

pub use charts::{ChartBase, ChartColors, ChartError, Color, DataSet, LineType, StockChart};
pub use domain::{Bar, PriceSeries, SeriesError};
pub use functions::{Function, FunctionError, FunctionKind};
pub use indicators::ValueSeries;
