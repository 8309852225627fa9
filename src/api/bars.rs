use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisDimension, BarGeometry, Spine, ViewRange, format_rounded, round_half_even};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, TextPrimitive};

use super::Axis;

const GAP_DECIMALS: u32 = 3;
const CONNECTOR_STROKE_WIDTH: f64 = 1.0;

/// Options for [`annotate_grouped_bars`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarAnnotationOptions {
    /// Decimal places of the value annotations.
    #[serde(default = "default_rounding")]
    pub rounding: u32,
    /// Horizontal spacing of connectors and annotations, relative to the
    /// largest bar value.
    #[serde(default = "default_spacing_factor")]
    pub spacing_factor: f64,
    #[serde(default = "default_bars_per_group")]
    pub bars_per_group: usize,
}

fn default_rounding() -> u32 {
    2
}

fn default_spacing_factor() -> f64 {
    0.1
}

fn default_bars_per_group() -> usize {
    1
}

impl Default for BarAnnotationOptions {
    fn default() -> Self {
        Self {
            rounding: default_rounding(),
            spacing_factor: default_spacing_factor(),
            bars_per_group: default_bars_per_group(),
        }
    }
}

impl BarAnnotationOptions {
    #[must_use]
    pub fn with_rounding(mut self, rounding: u32) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_spacing_factor(mut self, spacing_factor: f64) -> Self {
        self.spacing_factor = spacing_factor;
        self
    }

    #[must_use]
    pub fn with_bars_per_group(mut self, bars_per_group: usize) -> Self {
        self.bars_per_group = bars_per_group;
        self
    }
}

/// Geometry derived by [`annotate_grouped_bars`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarAnnotationLayout {
    /// Vertical space between neighbouring bars of one group.
    pub gap: f64,
    /// Y ticks centered on each group.
    pub tick_positions: Vec<f64>,
    pub max_value: f64,
    /// X coordinate where connector lines end.
    pub edge: f64,
    /// X offset where value annotations start.
    pub text_start: f64,
    pub x_limits: ViewRange,
}

impl BarAnnotationLayout {
    fn compute(
        bars: &[BarGeometry],
        group_start_index: &[f64],
        options: BarAnnotationOptions,
    ) -> ChartResult<Self> {
        let Some(first) = bars.first().copied() else {
            return Err(ChartError::InvalidAxis(
                "axis has no rendered bars to annotate".to_owned(),
            ));
        };
        let per_group = options.bars_per_group;
        if per_group == 0 || per_group > bars.len() {
            return Err(ChartError::InvalidArgument(format!(
                "bars_per_group must be in 1..={}, got {per_group}",
                bars.len()
            )));
        }
        let factor = options.spacing_factor;
        if !factor.is_finite() || factor < 0.0 {
            return Err(ChartError::InvalidArgument(
                "spacing_factor must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(index) = group_start_index.iter().find(|index| !index.is_finite()) {
            return Err(ChartError::InvalidArgument(format!(
                "group start index must be finite, got {index}"
            )));
        }

        let gap = if per_group > 1 {
            // Bars are stored series by series, so the first bar of the second
            // series sits right after the first bar of the first series.
            let neighbour = bars[bars.len() / per_group];
            round_half_even(neighbour.y - first.y - first.height, GAP_DECIMALS)?
        } else {
            0.0
        };

        let thickness = first.height;
        let center_offset = (per_group - 1) as f64 / 2.0 * (thickness + gap);
        let tick_positions = group_start_index
            .iter()
            .map(|index| index + center_offset)
            .collect();

        let max_value = bars.iter().map(|bar| bar.width).fold(0.0, f64::max);

        Ok(Self {
            gap,
            tick_positions,
            max_value,
            edge: max_value * (1.0 + 1.5 * factor),
            text_start: max_value * (1.0 + 2.5 * factor),
            x_limits: ViewRange::new(-factor * max_value, max_value * (1.0 + 3.0 * factor)),
        })
    }
}

/// Redraws a horizontal grouped bar chart in a label-on-the-margin style.
///
/// `group_start_index` holds the y position of the first bar of every group.
/// Each bar gets a connector from its end to a shared edge and its value,
/// rounded half-to-even, printed past that edge. X ticks are removed, Y ticks
/// move to group centers without tick marks, and all spines are hidden.
pub fn annotate_grouped_bars<A: Axis + ?Sized>(
    axis: &mut A,
    group_start_index: &[f64],
    options: BarAnnotationOptions,
) -> ChartResult<BarAnnotationLayout> {
    let bars = axis.bars();
    for bar in &bars {
        bar.validate().map_err(|e| ChartError::InvalidAxis(e.to_string()))?;
    }
    let layout = BarAnnotationLayout::compute(&bars, group_start_index, options)?;

    let font_size = axis.text_size_px();
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(ChartError::InvalidAxis(
            "annotation font size must be finite and > 0".to_owned(),
        ));
    }
    let mut annotations = Vec::with_capacity(bars.len());
    for bar in &bars {
        let text = format_rounded(bar.width, options.rounding)?;
        annotations.push((
            LinePrimitive::new(
                bar.width,
                bar.center_y(),
                layout.edge,
                bar.center_y(),
                CONNECTOR_STROKE_WIDTH,
                Color::BLACK,
            ),
            TextPrimitive::new(
                text,
                bar.x + layout.text_start,
                bar.y + layout.gap / 2.0,
                font_size,
                Color::BLACK,
            ),
        ));
    }

    let existing_labels = axis.tick_labels(AxisDimension::Y);
    axis.set_ticks(AxisDimension::X, Vec::new());
    axis.set_view_range(AxisDimension::X, layout.x_limits);
    axis.set_ticks(AxisDimension::Y, layout.tick_positions.clone());
    if existing_labels.len() == layout.tick_positions.len() {
        axis.set_tick_labels(AxisDimension::Y, existing_labels);
    }
    axis.set_tick_mark_length(AxisDimension::Y, 0.0);

    for (line, text) in annotations {
        trace!(value = %text.text, y = line.y1, "annotate bar");
        axis.add_line(line);
        axis.add_text(text);
    }
    for spine in Spine::ALL {
        axis.set_spine_visible(spine, false);
    }

    debug!(
        bar_count = bars.len(),
        bars_per_group = options.bars_per_group,
        gap = layout.gap,
        max_value = layout.max_value,
        edge = layout.edge,
        "annotated grouped bars"
    );
    Ok(layout)
}
