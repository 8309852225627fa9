use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{AxisDimension, ViewRange, format_tick_value};
use crate::error::{ChartError, ChartResult};

use super::Axis;

/// Options for [`normalize_limits`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitOptions {
    #[serde(default = "default_padding")]
    pub x_padding: f64,
    #[serde(default = "default_padding")]
    pub y_padding: f64,
    #[serde(default = "default_trim_spines")]
    pub trim_spines: bool,
    /// Keep the labels of surviving ticks instead of relabelling them with their values.
    #[serde(default)]
    pub keep_labels: bool,
}

fn default_padding() -> f64 {
    0.1
}

fn default_trim_spines() -> bool {
    true
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            x_padding: default_padding(),
            y_padding: default_padding(),
            trim_spines: default_trim_spines(),
            keep_labels: false,
        }
    }
}

impl LimitOptions {
    #[must_use]
    pub fn with_padding(mut self, x_padding: f64, y_padding: f64) -> Self {
        self.x_padding = x_padding;
        self.y_padding = y_padding;
        self
    }

    #[must_use]
    pub fn with_trim_spines(mut self, trim_spines: bool) -> Self {
        self.trim_spines = trim_spines;
        self
    }

    #[must_use]
    pub fn with_keep_labels(mut self, keep_labels: bool) -> Self {
        self.keep_labels = keep_labels;
        self
    }

    fn padding(self, dimension: AxisDimension) -> f64 {
        match dimension {
            AxisDimension::X => self.x_padding,
            AxisDimension::Y => self.y_padding,
        }
    }

    fn validate(self) -> ChartResult<Self> {
        for (value, name) in [(self.x_padding, "x_padding"), (self.y_padding, "y_padding")] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidArgument(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Outcome of normalizing one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionLimits {
    /// Lowest and highest surviving tick.
    pub tick_min: f64,
    pub tick_max: f64,
    /// View limits written to the axis.
    pub view: ViewRange,
}

/// Per-dimension result of [`normalize_limits`]; `None` marks a skipped dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LimitsReport {
    pub x: Option<DimensionLimits>,
    pub y: Option<DimensionLimits>,
}

impl LimitsReport {
    #[must_use]
    pub fn get(&self, dimension: AxisDimension) -> Option<DimensionLimits> {
        match dimension {
            AxisDimension::X => self.x,
            AxisDimension::Y => self.y,
        }
    }
}

struct DimensionPlan {
    dimension: AxisDimension,
    ticks: Vec<f64>,
    labels: Vec<String>,
    limits: DimensionLimits,
}

fn plan_dimension<A: Axis + ?Sized>(
    axis: &A,
    dimension: AxisDimension,
    padding: f64,
    keep_labels: bool,
) -> ChartResult<Option<DimensionPlan>> {
    let ticks = axis.ticks(dimension);
    let view = axis.view_range(dimension);
    if !view.is_finite() {
        return Err(ChartError::InvalidAxis(format!(
            "{dimension} view range must be finite"
        )));
    }
    if ticks.iter().any(|tick| !tick.is_finite()) {
        return Err(ChartError::InvalidAxis(format!(
            "{dimension} ticks must be finite"
        )));
    }

    let labels = axis.tick_labels(dimension);
    let keep_labels = keep_labels && !labels.is_empty() && labels.len() == ticks.len();

    let mut surviving: SmallVec<[usize; 16]> = SmallVec::new();
    for (index, tick) in ticks.iter().enumerate() {
        if view.contains(*tick) {
            surviving.push(index);
        }
    }
    if surviving.is_empty() {
        warn!(
            %dimension,
            tick_count = ticks.len(),
            "no ticks inside view range; leaving dimension untouched"
        );
        return Ok(None);
    }

    let kept_ticks: Vec<f64> = surviving.iter().map(|index| ticks[*index]).collect();
    let tick_min = kept_ticks.iter().copied().fold(f64::INFINITY, f64::min);
    let tick_max = kept_ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let kept_labels = if keep_labels {
        surviving.iter().map(|index| labels[*index].clone()).collect()
    } else {
        kept_ticks
            .iter()
            .map(|tick| format_tick_value(*tick))
            .collect::<ChartResult<Vec<_>>>()?
    };

    Ok(Some(DimensionPlan {
        dimension,
        ticks: kept_ticks,
        labels: kept_labels,
        limits: DimensionLimits {
            tick_min,
            tick_max,
            view: ViewRange::padded_by_max(tick_min, tick_max, padding),
        },
    }))
}

/// Aligns view limits with the outermost ticks.
///
/// Per dimension, ticks outside the current view are dropped, the view becomes
/// `[min - max * padding, max * (1 + padding)]` and, with `trim_spines`, the
/// tick-side spine is clipped to `[min, max]` while the opposite spine is
/// hidden. Surviving ticks are relabelled with their values unless
/// `keep_labels` is set. Dimensions with no tick inside the view are skipped.
/// Both dimensions are validated before the axis is touched.
pub fn normalize_limits<A: Axis + ?Sized>(
    axis: &mut A,
    options: LimitOptions,
) -> ChartResult<LimitsReport> {
    let options = options.validate()?;

    let mut plans = Vec::with_capacity(AxisDimension::ALL.len());
    for dimension in AxisDimension::ALL {
        if let Some(plan) = plan_dimension(
            &*axis,
            dimension,
            options.padding(dimension),
            options.keep_labels,
        )? {
            plans.push(plan);
        }
    }

    let mut report = LimitsReport::default();
    for plan in plans {
        let DimensionPlan {
            dimension,
            ticks,
            labels,
            limits,
        } = plan;

        axis.set_ticks(dimension, ticks);
        axis.set_tick_labels(dimension, labels);
        axis.set_view_range(dimension, limits.view);
        if options.trim_spines {
            axis.set_spine_bounds(dimension.tick_spine(), limits.tick_min, limits.tick_max);
            axis.set_spine_visible(dimension.opposite_spine(), false);
        }
        debug!(
            %dimension,
            tick_min = limits.tick_min,
            tick_max = limits.tick_max,
            view_min = limits.view.min,
            view_max = limits.view.max,
            trim_spines = options.trim_spines,
            "normalized axis limits"
        );

        match dimension {
            AxisDimension::X => report.x = Some(limits),
            AxisDimension::Y => report.y = Some(limits),
        }
    }

    Ok(report)
}

/// Convenience form of [`normalize_limits`] taking the options inline.
pub fn set_limits<A: Axis + ?Sized>(
    axis: &mut A,
    x_padding: f64,
    y_padding: f64,
    trim_spines: bool,
) -> ChartResult<LimitsReport> {
    normalize_limits(
        axis,
        LimitOptions::default()
            .with_padding(x_padding, y_padding)
            .with_trim_spines(trim_spines),
    )
}
