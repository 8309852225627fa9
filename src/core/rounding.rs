use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

/// Decimal places used to collapse floating-point noise in tick positions.
pub const TICK_KEY_DECIMALS: u32 = 9;

/// Magnitude from which every `f64` is an integer, so decimal rounding is a no-op.
const INTEGRAL_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

fn is_integral_magnitude(value: f64) -> bool {
    value.is_finite() && value.abs() >= INTEGRAL_MAGNITUDE
}

fn f64_to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn round_decimal(value: f64, decimals: u32, field_name: &str) -> ChartResult<Decimal> {
    let rounded = f64_to_decimal(value, field_name)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    Ok(rounded.normalize())
}

/// Rounds `value` to `decimals` places, ties going to the even neighbor.
///
/// The value is taken at its shortest decimal representation first, so
/// `2.675` rounds to `2.68` rather than following its binary expansion.
pub fn round_half_even(value: f64, decimals: u32) -> ChartResult<f64> {
    if is_integral_magnitude(value) {
        return Ok(value);
    }
    decimal_to_f64(round_decimal(value, decimals, "value")?, "rounded value")
}

/// Stable map key for a tick position.
pub fn tick_key(position: f64) -> ChartResult<f64> {
    if is_integral_magnitude(position) {
        return Ok(position);
    }
    decimal_to_f64(
        round_decimal(position, TICK_KEY_DECIMALS, "tick position")?,
        "tick position",
    )
}

/// Formats `value` rounded half-to-even to `decimals` places, without trailing zeros.
pub fn format_rounded(value: f64, decimals: u32) -> ChartResult<String> {
    if is_integral_magnitude(value) {
        return Ok(value.to_string());
    }
    Ok(round_decimal(value, decimals, "value")?.to_string())
}

/// Default label text for a tick without an explicit label.
pub fn format_tick_value(position: f64) -> ChartResult<String> {
    if is_integral_magnitude(position) {
        return Ok(position.to_string());
    }
    Ok(round_decimal(position, TICK_KEY_DECIMALS, "tick position")?.to_string())
}
