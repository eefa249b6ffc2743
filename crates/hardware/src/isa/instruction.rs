//! MAU instruction representation.
//!
//! An instruction is five nibbles: the opcode followed by the two operand
//! pairs. On the serial line they travel in the order `[op, a1, a2, b1, b2]`;
//! packed into a word the opcode occupies the top nibble.

use std::fmt;

use super::opcodes::Opcode;
use crate::common::Nibble;
use crate::common::constants::{INSTRUCTION_NIBBLES, NIBBLE_BITS};

/// A complete MAU instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Opcode field.
    pub op: Nibble,
    /// First x-lane operand (routed to `x0`).
    pub a1: Nibble,
    /// Second x-lane operand (routed to `x1`).
    pub a2: Nibble,
    /// First y-lane operand (routed to `y0`).
    pub b1: Nibble,
    /// Second y-lane operand (routed to `y1`).
    pub b2: Nibble,
}

impl Instruction {
    /// Builds an instruction from an opcode and raw operand values.
    ///
    /// Operands are truncated to 4 bits.
    pub const fn new(op: Opcode, a1: u8, a2: u8, b1: u8, b2: u8) -> Self {
        Self {
            op: op.nibble(),
            a1: Nibble::truncate(a1),
            a2: Nibble::truncate(a2),
            b1: Nibble::truncate(b1),
            b2: Nibble::truncate(b2),
        }
    }

    /// Decoded opcode.
    #[inline]
    pub const fn opcode(&self) -> Opcode {
        Opcode::from_nibble(self.op)
    }

    /// Fields in serial wire order.
    pub const fn to_nibbles(&self) -> [Nibble; INSTRUCTION_NIBBLES] {
        [self.op, self.a1, self.a2, self.b1, self.b2]
    }

    /// Inverse of [`to_nibbles`](Self::to_nibbles).
    pub const fn from_nibbles(n: [Nibble; INSTRUCTION_NIBBLES]) -> Self {
        Self {
            op: n[0],
            a1: n[1],
            a2: n[2],
            b1: n[3],
            b2: n[4],
        }
    }

    /// Packs the instruction into a 20-bit word, opcode in bits 19:16.
    pub fn to_word(&self) -> u32 {
        self.to_nibbles()
            .iter()
            .fold(0, |acc, n| (acc << NIBBLE_BITS) | u32::from(n.val()))
    }

    /// Unpacks a 20-bit word. Bits above bit 19 are ignored.
    pub fn from_word(word: u32) -> Self {
        let mut n = [Nibble::ZERO; INSTRUCTION_NIBBLES];
        for (i, slot) in n.iter_mut().enumerate() {
            let shift = NIBBLE_BITS * (INSTRUCTION_NIBBLES - 1 - i) as u32;
            *slot = Nibble::truncate((word >> shift) as u8);
        }
        Self::from_nibbles(n)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} a=({}, {}) b=({}, {})",
            self.opcode(),
            self.a1.val(),
            self.a2.val(),
            self.b1.val(),
            self.b2.val()
        )
    }
}
