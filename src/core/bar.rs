use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Geometry of one rendered horizontal bar, in data coordinates.
///
/// `width` carries the bar's value along x; `height` is the bar thickness
/// along y, with `y` at the bar's lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Vertical center of the bar.
    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.x, "x"),
            (self.y, "y"),
            (self.width, "width"),
            (self.height, "height"),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bar `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Builds horizontal bars for grouped series laid out the way a plotting
/// library stacks them: every bar of series 0 first, then series 1, and so on.
///
/// `values[s][g]` is the value of series `s` in group `g`. Groups start at
/// `index[g]` and bars within a group are offset by `thickness + gap`.
pub fn grouped_horizontal_bars(
    index: &[f64],
    values: &[Vec<f64>],
    thickness: f64,
    gap: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(ChartError::InvalidArgument(
            "bar thickness must be finite and > 0".to_owned(),
        ));
    }
    if !gap.is_finite() || gap < 0.0 {
        return Err(ChartError::InvalidArgument(
            "bar gap must be finite and >= 0".to_owned(),
        ));
    }

    let mut bars = Vec::with_capacity(values.len() * index.len());
    for (series, series_values) in values.iter().enumerate() {
        if series_values.len() != index.len() {
            return Err(ChartError::InvalidArgument(format!(
                "series {series} has {} values for {} groups",
                series_values.len(),
                index.len()
            )));
        }
        let offset = series as f64 * (thickness + gap);
        for (start, value) in index.iter().zip(series_values) {
            bars.push(BarGeometry::new(0.0, start + offset, *value, thickness).validate()?);
        }
    }
    Ok(bars)
}
