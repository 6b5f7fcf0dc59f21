//! Typed client for the charts REST resource.

mod charts;
mod types;

#[cfg(test)]
pub use charts::MockChartsApi;
pub use charts::{ChartsApi, ChartsClient, DEFAULT_BASE_URL};
pub use types::{Chart, ChartMeta, ChartUpdate, CreatedChart, NewChart};
