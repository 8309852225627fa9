use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const CONTAINS_EPSILON: f64 = 1e-9;

/// Visible data range along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub min: f64,
    pub max: f64,
}

impl ViewRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Range ordered so that `min <= max`, for inverted axes.
    #[must_use]
    pub fn ordered(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let ordered = self.ordered();
        value >= ordered.min - CONTAINS_EPSILON && value <= ordered.max + CONTAINS_EPSILON
    }

    /// Range from `min` to `max` extended by `padding` times `max` on both sides.
    #[must_use]
    pub fn padded_by_max(min: f64, max: f64, padding: f64) -> Self {
        Self::new(min - max * padding, max * (1.0 + padding))
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_finite() {
            return Err(ChartError::InvalidData(
                "view range bounds must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for ViewRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Visibility and extent of one spine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpineState {
    pub visible: bool,
    /// Data-space extent; `None` spans the whole view.
    pub bounds: Option<(f64, f64)>,
}

impl Default for SpineState {
    fn default() -> Self {
        Self {
            visible: true,
            bounds: None,
        }
    }
}
