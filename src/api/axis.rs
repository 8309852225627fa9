use crate::core::{AxisDimension, BarGeometry, Spine, ViewRange};
use crate::render::{LinePrimitive, TextPrimitive};

/// Capabilities the post-processing helpers need from a plotting surface.
///
/// Implementations own the axes and their lifecycle; helpers only read and
/// overwrite the state exposed here.
pub trait Axis {
    fn ticks(&self, dimension: AxisDimension) -> Vec<f64>;

    /// Replaces tick positions. Labels previously set for this dimension are
    /// cleared.
    fn set_ticks(&mut self, dimension: AxisDimension, positions: Vec<f64>);

    /// Current tick labels; empty when no explicit labels are set.
    fn tick_labels(&self, dimension: AxisDimension) -> Vec<String>;

    fn set_tick_labels(&mut self, dimension: AxisDimension, labels: Vec<String>);

    fn view_range(&self, dimension: AxisDimension) -> ViewRange;

    fn set_view_range(&mut self, dimension: AxisDimension, range: ViewRange);

    fn set_tick_mark_length(&mut self, dimension: AxisDimension, length: f64);

    fn set_spine_visible(&mut self, spine: Spine, visible: bool);

    fn set_spine_bounds(&mut self, spine: Spine, min: f64, max: f64);

    /// Rendered bars in drawing order.
    fn bars(&self) -> Vec<BarGeometry>;

    fn add_line(&mut self, line: LinePrimitive);

    fn add_text(&mut self, text: TextPrimitive);

    /// Font size used for annotations added by the helpers.
    fn text_size_px(&self) -> f64;
}
