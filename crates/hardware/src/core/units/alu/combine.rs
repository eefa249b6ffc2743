//! Post-combine stage.
//!
//! Merges the two lane products into the final result. Enabled, it is an
//! 11-bit add or subtract whose bit 10 becomes the carry; disabled, the low
//! five bits of each lane are packed side by side and the carry is 0.

use crate::common::constants::{CARRY_BIT, LANE5_BITS, LANE5_MASK, POST_MASK, RESULT_MASK};
use crate::core::pipeline::signals::AluResult;

/// Combines lane products `x` and `y` (10 bits each).
///
/// # Arguments
///
/// * `x`        - X-lane product.
/// * `y`        - Y-lane product.
/// * `post_en`  - Add/subtract when set, pack when clear.
/// * `post_sub` - Subtract `y` from `x` instead of adding.
pub const fn combine(x: u16, y: u16, post_en: bool, post_sub: bool) -> AluResult {
    let (x, y) = (x & RESULT_MASK, y & RESULT_MASK);
    if !post_en {
        return AluResult::new(((x & LANE5_MASK) << LANE5_BITS) | (y & LANE5_MASK), false);
    }

    let raw = if post_sub {
        x.wrapping_sub(y)
    } else {
        x.wrapping_add(y)
    };
    let wide = raw & POST_MASK;
    AluResult::new(wide & RESULT_MASK, (wide >> CARRY_BIT) & 1 == 1)
}
