use serde::{Deserialize, Serialize};

use crate::core::{Spine, SpineState, ViewRange};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one axes draw pass.
///
/// All coordinates are in data space; backends map them through `x_range` and
/// `y_range` onto their own surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub x_range: ViewRange,
    pub y_range: ViewRange,
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
    pub spines: Vec<(Spine, SpineState)>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(x_range: ViewRange, y_range: ViewRange) -> Self {
        Self {
            x_range,
            y_range,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            spines: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.x_range.validate()?;
        self.y_range.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    /// Spines that a backend should draw.
    pub fn visible_spines(&self) -> impl Iterator<Item = &(Spine, SpineState)> {
        self.spines.iter().filter(|(_, state)| state.visible)
    }
}
