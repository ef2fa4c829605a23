//! Pure transformations from service responses into chart and table state.

pub mod curve;
pub mod demo;

pub use curve::{LineChart, SummaryTable, TableRow};
pub use demo::{DemoSummary, ScatterChart, ScatterSeries};
