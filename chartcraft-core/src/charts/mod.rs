//! Chart configuration — the base chart model, overlay colors, text codec,
//! and the renderable data-set hand-off.

pub mod chart;
pub mod codec;
pub mod colors;
pub mod data_set;

pub use chart::{ChartBase, ChartError, StockChart};
pub use colors::{ChartColors, Color};
pub use data_set::{DataSet, LineType};
