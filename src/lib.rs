//! better-graphs: cosmetic post-processing for charts.
//!
//! Helpers that align axis limits with tick marks, merge custom tick labels,
//! redraw grouped bar charts with margin annotations and resolve a consistent
//! publication theme. Plotting surfaces plug in through [`api::Axis`];
//! [`api::ChartAxes`] is a headless implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Axis, ChartAxes};
pub use error::{ChartError, ChartResult};
