//! Result frame layout.
//!
//! A result leaves the unit as five nibbles, least significant first:
//!
//! | nibble | contents                  |
//! |--------|---------------------------|
//! | 0      | `value[3:0]`              |
//! | 1      | `value[7:4]`              |
//! | 2      | `{value[9:8], carry, 0}`  |
//! | 3      | reserved, 0               |
//! | 4      | reserved, 0               |

use crate::common::constants::{NIBBLE_BITS, RESULT_NIBBLES};
use crate::common::{MauError, Nibble, Result};
use crate::core::pipeline::signals::AluResult;

/// Position of the carry flag inside nibble 2.
const CARRY_POS: u8 = 1;

/// Position of `value[9:8]` inside nibble 2.
const HIGH_BITS_POS: u8 = 2;

/// Serializes a result into its five-nibble frame.
pub const fn encode_result(result: AluResult) -> [Nibble; RESULT_NIBBLES] {
    let v = result.value;
    let top = ((v >> 8) & 0b11) as u8;
    [
        Nibble::truncate(v as u8),
        Nibble::truncate((v >> NIBBLE_BITS) as u8),
        Nibble::truncate((top << HIGH_BITS_POS) | ((result.carry as u8) << CARRY_POS)),
        Nibble::ZERO,
        Nibble::ZERO,
    ]
}

/// Parses a five-nibble frame back into a result.
///
/// # Errors
///
/// Returns [`MauError::MalformedFrame`] if bit 0 of nibble 2 or any bit of
/// nibbles 3 and 4 is set.
pub fn decode_result(frame: [Nibble; RESULT_NIBBLES]) -> Result<AluResult> {
    let [n0, n1, n2, n3, n4] = frame.map(Nibble::val);
    if n2 & 1 != 0 || n3 != 0 || n4 != 0 {
        return Err(MauError::MalformedFrame {
            nibbles: [n0, n1, n2, n3, n4],
        });
    }

    let value = u16::from(n0)
        | (u16::from(n1) << NIBBLE_BITS)
        | (u16::from(n2 >> HIGH_BITS_POS) << 8);
    Ok(AluResult::new(value, (n2 >> CARRY_POS) & 1 == 1))
}
