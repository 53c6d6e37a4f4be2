//! Domain types — bars and the validated price series charts render from.

pub mod bar;
pub mod series;

pub use bar::Bar;
pub use series::{PriceSeries, SeriesError};
