//! Post-processing helpers operating on an [`Axis`].

mod axis;
mod bars;
mod chart_axes;
mod limits;
mod theme;
mod ticks;

pub use axis::Axis;
pub use bars::{BarAnnotationLayout, BarAnnotationOptions, annotate_grouped_bars};
pub use chart_axes::ChartAxes;
pub use limits::{DimensionLimits, LimitOptions, LimitsReport, normalize_limits, set_limits};
pub use theme::{
    AMSMATH_PREAMBLE, DEFAULT_SERIF_FONT, FontFamily, FontSizes, PlotContext, PlotDefaults,
    ThemeConfig, TickDirection, current_defaults, palette_colors, set_pretty_defaults,
};
pub use ticks::{TickMergeOptions, merge_ticks, merge_ticks_on, merge_ticks_with};
