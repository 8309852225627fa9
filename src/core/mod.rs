pub mod bar;
pub mod dimension;
pub mod rounding;
pub mod tick_map;
pub mod view;

pub use bar::{BarGeometry, grouped_horizontal_bars};
pub use dimension::{AxisDimension, Spine};
pub use rounding::{TICK_KEY_DECIMALS, format_rounded, format_tick_value, round_half_even};
pub use tick_map::{TickMap, TickOrder};
pub use view::{SpineState, ViewRange};
