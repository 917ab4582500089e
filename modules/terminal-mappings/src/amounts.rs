//! Numeric widening from SDK amounts to transport floats
//!
//! The plugin schema carries every amount as a 64-bit float. Minor-unit
//! integers above 2^53 lose precision on the way; that is accepted and only
//! logged. Fixed-point decimals are rounded half-to-even at the configured
//! scale before widening so the result does not depend on float defaults.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest integer an f64 represents exactly
pub const MAX_EXACT_F64_INTEGER: u64 = 1 << 53;

/// Widen a minor-unit amount to a transport float
pub fn minor_units_to_f64(amount: u64) -> f64 {
    if amount > MAX_EXACT_F64_INTEGER {
        tracing::debug!(amount, "Amount exceeds exact float range, precision will be lost");
    }
    amount as f64
}

/// Round a fixed-point decimal half-to-even at `scale` and widen it to a float
///
/// Returns `None` when the value has no float representation, which callers
/// treat the same as an absent amount.
pub fn decimal_to_f64(value: Decimal, scale: u32) -> Option<f64> {
    value
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
        .to_f64()
}
