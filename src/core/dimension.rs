use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Axis dimension selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDimension {
    X,
    Y,
}

impl AxisDimension {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Spine drawn along the tick side of this dimension.
    #[must_use]
    pub const fn tick_spine(self) -> Spine {
        match self {
            Self::X => Spine::Bottom,
            Self::Y => Spine::Left,
        }
    }

    /// Spine parallel to `tick_spine` on the far side of the plot.
    #[must_use]
    pub const fn opposite_spine(self) -> Spine {
        match self {
            Self::X => Spine::Top,
            Self::Y => Spine::Right,
        }
    }
}

impl fmt::Display for AxisDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

impl FromStr for AxisDimension {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(ChartError::InvalidAxis(format!(
                "unknown axis dimension `{other}` (expected `x` or `y`)"
            ))),
        }
    }
}

/// Border line along one edge of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spine {
    Left,
    Right,
    Top,
    Bottom,
}

impl Spine {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Bottom => 3,
        }
    }
}
