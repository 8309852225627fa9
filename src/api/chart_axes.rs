use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisDimension, BarGeometry, Spine, SpineState, ViewRange};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextPrimitive,
};

use super::{Axis, PlotDefaults};

const DEFAULT_TEXT_SIZE_PX: f64 = 10.0;
const DEFAULT_TICK_MARK_LENGTH: f64 = 3.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DimensionState {
    ticks: Vec<f64>,
    labels: Vec<String>,
    range: ViewRange,
    tick_mark_length: f64,
}

impl DimensionState {
    fn new(range: ViewRange) -> Self {
        Self {
            ticks: Vec::new(),
            labels: Vec::new(),
            range,
            tick_mark_length: DEFAULT_TICK_MARK_LENGTH,
        }
    }
}

/// Headless axes model implementing [`Axis`].
///
/// Records everything the helpers write and can hand the result to any
/// [`Renderer`] as a [`RenderFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxes {
    x: DimensionState,
    y: DimensionState,
    spines: [SpineState; 4],
    bars: Vec<BarGeometry>,
    bar_color: Color,
    lines: Vec<LinePrimitive>,
    texts: Vec<TextPrimitive>,
    text_size_px: f64,
}

impl ChartAxes {
    #[must_use]
    pub fn new(x_range: ViewRange, y_range: ViewRange) -> Self {
        Self {
            x: DimensionState::new(x_range),
            y: DimensionState::new(y_range),
            spines: [SpineState::default(); 4],
            bars: Vec::new(),
            bar_color: Color::rgb(0.2, 0.4, 0.7),
            lines: Vec::new(),
            texts: Vec::new(),
            text_size_px: DEFAULT_TEXT_SIZE_PX,
        }
    }

    /// Picks up annotation font size and bar color from resolved theme defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &PlotDefaults) -> Self {
        self.text_size_px = defaults.fonts.tick_label_size;
        if let Some(color) = defaults.palette.first() {
            self.bar_color = *color;
        }
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, dimension: AxisDimension, positions: Vec<f64>) -> Self {
        self.set_ticks(dimension, positions);
        self
    }

    #[must_use]
    pub fn with_bars(mut self, bars: Vec<BarGeometry>) -> Self {
        self.bars = bars;
        self
    }

    fn dimension(&self, dimension: AxisDimension) -> &DimensionState {
        match dimension {
            AxisDimension::X => &self.x,
            AxisDimension::Y => &self.y,
        }
    }

    fn dimension_mut(&mut self, dimension: AxisDimension) -> &mut DimensionState {
        match dimension {
            AxisDimension::X => &mut self.x,
            AxisDimension::Y => &mut self.y,
        }
    }

    #[must_use]
    pub fn spine(&self, spine: Spine) -> SpineState {
        self.spines[spine.index()]
    }

    #[must_use]
    pub fn tick_mark_length(&self, dimension: AxisDimension) -> f64 {
        self.dimension(dimension).tick_mark_length
    }

    #[must_use]
    pub fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }

    #[must_use]
    pub fn texts(&self) -> &[TextPrimitive] {
        &self.texts
    }

    /// Tick positions paired with the labels a backend would draw.
    pub fn labelled_ticks(&self, dimension: AxisDimension) -> ChartResult<Vec<(f64, String)>> {
        let state = self.dimension(dimension);
        if state.labels.len() == state.ticks.len() {
            return Ok(state
                .ticks
                .iter()
                .copied()
                .zip(state.labels.iter().cloned())
                .collect());
        }
        state
            .ticks
            .iter()
            .map(|tick| Ok((*tick, crate::core::format_tick_value(*tick)?)))
            .collect()
    }

    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.x.range, self.y.range);
        frame.x_ticks = self.labelled_ticks(AxisDimension::X)?;
        frame.y_ticks = self.labelled_ticks(AxisDimension::Y)?;
        frame.spines = Spine::ALL
            .iter()
            .map(|spine| (*spine, self.spine(*spine)))
            .collect();
        let frame = self
            .bars
            .iter()
            .map(|bar| RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, self.bar_color))
            .fold(frame, RenderFrame::with_rect);
        let frame = self.lines.iter().copied().fold(frame, RenderFrame::with_line);
        Ok(self.texts.iter().cloned().fold(frame, RenderFrame::with_text))
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.render_frame()?;
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render axes frame"
        );
        renderer.render(&frame)
    }
}

impl Default for ChartAxes {
    fn default() -> Self {
        Self::new(ViewRange::default(), ViewRange::default())
    }
}

impl Axis for ChartAxes {
    fn ticks(&self, dimension: AxisDimension) -> Vec<f64> {
        self.dimension(dimension).ticks.clone()
    }

    fn set_ticks(&mut self, dimension: AxisDimension, positions: Vec<f64>) {
        let state = self.dimension_mut(dimension);
        state.ticks = positions;
        state.labels.clear();
    }

    fn tick_labels(&self, dimension: AxisDimension) -> Vec<String> {
        self.dimension(dimension).labels.clone()
    }

    fn set_tick_labels(&mut self, dimension: AxisDimension, labels: Vec<String>) {
        self.dimension_mut(dimension).labels = labels;
    }

    fn view_range(&self, dimension: AxisDimension) -> ViewRange {
        self.dimension(dimension).range
    }

    fn set_view_range(&mut self, dimension: AxisDimension, range: ViewRange) {
        self.dimension_mut(dimension).range = range;
    }

    fn set_tick_mark_length(&mut self, dimension: AxisDimension, length: f64) {
        self.dimension_mut(dimension).tick_mark_length = length;
    }

    fn set_spine_visible(&mut self, spine: Spine, visible: bool) {
        self.spines[spine.index()].visible = visible;
    }

    fn set_spine_bounds(&mut self, spine: Spine, min: f64, max: f64) {
        self.spines[spine.index()].bounds = Some((min, max));
    }

    fn bars(&self) -> Vec<BarGeometry> {
        self.bars.clone()
    }

    fn add_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    fn add_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    fn text_size_px(&self) -> f64 {
        self.text_size_px
    }
}
