//! Money helpers using rust_decimal
//!
//! All booking arithmetic stays in `Decimal` at full precision. Rounding to
//! the currency minor unit happens only here, when a value leaves the core
//! for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency minor unit (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Children pay 90% of the unit price
pub const CHILD_RATE: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Infants ride free
pub const INFANT_RATE: Decimal = Decimal::ZERO;

/// Round for display, 2 decimal places
#[inline]
pub fn to_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Display value formatted with exactly two decimals
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", to_display(value))
}
