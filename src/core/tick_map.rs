use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::rounding::{format_tick_value, tick_key};
use crate::error::ChartResult;

/// Order in which merged ticks are written back to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickOrder {
    /// Existing ticks in their original order, new positions appended.
    #[default]
    Insertion,
    /// Ascending by position.
    Sorted,
}

/// Insertion-ordered mapping from rounded tick position to label text.
///
/// Positions are rounded to 9 decimals before use as keys, so values that only
/// differ by floating-point noise address the same tick. Re-inserting an
/// existing position replaces its label in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickMap {
    entries: IndexMap<OrderedFloat<f64>, String>,
}

impl TickMap {
    /// Builds a map labelling every tick with its own value.
    pub fn from_tick_values(positions: &[f64]) -> ChartResult<Self> {
        Self::from_axis_ticks(positions, &[])
    }

    /// Builds a map from an axis's current ticks.
    ///
    /// `labels` is used when it has one entry per tick; otherwise every tick is
    /// labelled with its own value.
    pub fn from_axis_ticks(positions: &[f64], labels: &[String]) -> ChartResult<Self> {
        let use_labels = labels.len() == positions.len();
        let mut map = Self {
            entries: IndexMap::with_capacity(positions.len()),
        };
        for (index, position) in positions.iter().copied().enumerate() {
            let label = if use_labels {
                labels[index].clone()
            } else {
                format_tick_value(position)?
            };
            map.insert(position, label)?;
        }
        Ok(map)
    }

    /// Inserts or overwrites the label at `position`.
    ///
    /// Returns the previous label when the rounded position already existed.
    pub fn insert(
        &mut self,
        position: f64,
        label: impl Into<String>,
    ) -> ChartResult<Option<String>> {
        let key = OrderedFloat(tick_key(position)?);
        Ok(self.entries.insert(key, label.into()))
    }

    #[must_use]
    pub fn get(&self, position: f64) -> Option<&str> {
        let key = OrderedFloat(tick_key(position).ok()?);
        self.entries.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sort_by_position(&mut self) {
        self.entries.sort_keys();
    }

    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.entries.keys().map(|key| key.into_inner()).collect()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.values().cloned().collect()
    }

    /// Flattens the map into parallel position and label sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<String>) {
        self.entries
            .into_iter()
            .map(|(key, label)| (key.into_inner(), label))
            .unzip()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.into_inner(), label.as_str()))
    }
}
