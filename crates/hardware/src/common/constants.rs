//! Datapath widths and masks.
//!
//! Every lane quantity in the MAU is a fixed bit width. These constants are
//! the single source for the masks applied at each stage boundary.

/// Width of an operand or opcode field in bits.
pub const NIBBLE_BITS: u32 = 4;

/// Mask for a 4-bit nibble.
pub const NIBBLE_MASK: u8 = 0xF;

/// Mask for a 5-bit pre-adder result or multiplier input.
pub const LANE5_MASK: u16 = 0x1F;

/// Width of a lane's pre-adder result in bits.
pub const LANE5_BITS: u32 = 5;

/// Mask for the 10-bit multiplier output and final result.
pub const RESULT_MASK: u16 = 0x3FF;

/// Mask for the 11-bit post-combine intermediate.
pub const POST_MASK: u16 = 0x7FF;

/// Bit index of the carry in the post-combine intermediate.
pub const CARRY_BIT: u32 = 10;

/// Mask for a 3-bit multiplier input selector.
pub const MUL_SEL_MASK: u8 = 0x7;

/// Number of nibbles in an instruction frame (`op`, `a1`, `a2`, `b1`, `b2`).
pub const INSTRUCTION_NIBBLES: usize = 5;

/// Number of nibbles in a result frame.
pub const RESULT_NIBBLES: usize = 5;

/// Ticks from the capture of an instruction's last nibble until TX has started
/// shifting its result, with every stage idle and read-enable already high.
///
/// RX pulse, DECODE register, ALU hold, TX capture, TX start.
pub const FILL_LATENCY: u32 = 5;
