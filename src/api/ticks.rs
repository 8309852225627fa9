use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisDimension, TickMap, TickOrder};
use crate::error::{ChartError, ChartResult};

use super::Axis;

/// Options for [`merge_ticks_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickMergeOptions {
    #[serde(default)]
    pub order: TickOrder,
    /// Keep labels already on the axis instead of resetting them to the tick values.
    #[serde(default)]
    pub keep_existing_labels: bool,
}

impl TickMergeOptions {
    #[must_use]
    pub fn with_order(mut self, order: TickOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_existing_labels(mut self, keep: bool) -> Self {
        self.keep_existing_labels = keep;
        self
    }
}

/// Adds custom ticks to `dimension`, overwriting labels of existing ticks at
/// the same position.
///
/// Existing ticks keep their order and are relabelled with their own value;
/// new positions are appended.
pub fn merge_ticks<A, S>(
    axis: &mut A,
    new_positions: &[f64],
    new_labels: &[S],
    dimension: AxisDimension,
) -> ChartResult<TickMap>
where
    A: Axis + ?Sized,
    S: AsRef<str>,
{
    merge_ticks_with(
        axis,
        new_positions,
        new_labels,
        dimension,
        TickMergeOptions::default(),
    )
}

/// Same as [`merge_ticks`] with the dimension given as `"x"` or `"y"`.
pub fn merge_ticks_on<A, S>(
    axis: &mut A,
    new_positions: &[f64],
    new_labels: &[S],
    which: &str,
) -> ChartResult<TickMap>
where
    A: Axis + ?Sized,
    S: AsRef<str>,
{
    let dimension = which.parse::<AxisDimension>()?;
    merge_ticks(axis, new_positions, new_labels, dimension)
}

pub fn merge_ticks_with<A, S>(
    axis: &mut A,
    new_positions: &[f64],
    new_labels: &[S],
    dimension: AxisDimension,
    options: TickMergeOptions,
) -> ChartResult<TickMap>
where
    A: Axis + ?Sized,
    S: AsRef<str>,
{
    if new_positions.len() != new_labels.len() {
        return Err(ChartError::InvalidArgument(format!(
            "tick positions and labels differ in length: {} != {}",
            new_positions.len(),
            new_labels.len()
        )));
    }
    if let Some(position) = new_positions.iter().find(|position| !position.is_finite()) {
        return Err(ChartError::InvalidArgument(format!(
            "tick position must be finite, got {position}"
        )));
    }

    let current = axis.ticks(dimension);
    if current.iter().any(|tick| !tick.is_finite()) {
        return Err(ChartError::InvalidAxis(format!(
            "{dimension} ticks must be finite"
        )));
    }
    let mut map = if options.keep_existing_labels {
        TickMap::from_axis_ticks(&current, &axis.tick_labels(dimension))?
    } else {
        TickMap::from_tick_values(&current)?
    };

    let mut overwritten = 0usize;
    for (position, label) in new_positions.iter().zip(new_labels) {
        let label: &str = label.as_ref();
        if let Some(previous) = map.insert(*position, label)? {
            trace!(
                %dimension,
                position = *position,
                previous = %previous,
                "overwrote tick label"
            );
            overwritten += 1;
        }
    }
    if options.order == TickOrder::Sorted {
        map.sort_by_position();
    }

    let (positions, labels) = map.clone().into_parts();
    debug!(
        %dimension,
        existing_count = current.len(),
        merged_count = positions.len(),
        overwritten,
        order = ?options.order,
        keep_existing_labels = options.keep_existing_labels,
        "merged custom ticks"
    );
    axis.set_ticks(dimension, positions);
    axis.set_tick_labels(dimension, labels);
    Ok(map)
}
