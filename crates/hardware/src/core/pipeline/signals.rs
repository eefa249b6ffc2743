//! Inter-stage payloads and per-tick stage inputs.
//!
//! This module defines what travels across each handshake and what every
//! stage samples on a clock edge:
//! 1. **Payloads:** [`Command`] (DECODE→ALU) and [`AluResult`] (ALU→TX).
//! 2. **Stage Inputs:** One `*Inputs` struct per stage, built by the top level
//!    from committed state before any stage ticks.

use std::fmt;

use crate::common::Nibble;
use crate::common::constants::{CARRY_BIT, RESULT_MASK};
use crate::isa::control::ControlWord;
use crate::isa::instruction::Instruction;

/// Routed operands plus the control word for one ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// X-lane first operand.
    pub x0: Nibble,
    /// X-lane second operand.
    pub x1: Nibble,
    /// Y-lane first operand.
    pub y0: Nibble,
    /// Y-lane second operand.
    pub y1: Nibble,
    /// Datapath switches.
    pub ctrl: ControlWord,
}

impl Command {
    /// Applies the fixed operand routing and looks up the control word.
    pub const fn route(inst: &Instruction) -> Self {
        Self {
            x0: inst.a1,
            x1: inst.a2,
            y0: inst.b1,
            y1: inst.b2,
            ctrl: ControlWord::for_opcode(inst.opcode()),
        }
    }
}

/// A 10-bit ALU result and its carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AluResult {
    /// Result value; only bits 9:0 are ever set.
    pub value: u16,
    /// Bit 10 of the post-combine, or 0 for packed results.
    pub carry: bool,
}

impl AluResult {
    /// Builds a result, masking `value` to 10 bits.
    #[inline]
    pub const fn new(value: u16, carry: bool) -> Self {
        Self {
            value: value & RESULT_MASK,
            carry,
        }
    }

    /// The result as one 11-bit word, carry in bit 10.
    pub const fn to_word(self) -> u16 {
        self.value | ((self.carry as u16) << CARRY_BIT)
    }
}

impl fmt::Display for AluResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x} (carry {})", self.value, u8::from(self.carry))
    }
}

/// Signals sampled by the receiver on a tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct RxInputs {
    /// Shared serial strobe.
    pub strobe: bool,
    /// Write enable; while low the field counter is held at 0.
    pub write_en: bool,
    /// Serial data nibble (`mosi`).
    pub data: Nibble,
    /// Decoder readiness.
    pub downstream_ready: bool,
}

/// Signals sampled by the decoder on a tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeInputs {
    /// Assembled instruction from the receiver.
    pub instruction: Instruction,
    /// Receiver valid pulse.
    pub valid: bool,
    /// ALU command readiness.
    pub downstream_ready: bool,
}

/// Signals sampled by the ALU on a tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct AluInputs {
    /// Command valid.
    pub cmd_valid: bool,
    /// Command payload.
    pub command: Command,
    /// Downstream result readiness.
    pub res_ready: bool,
}

/// Signals sampled by the transmitter on a tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TxInputs {
    /// Result valid from the ALU.
    pub res_valid: bool,
    /// Result payload.
    pub result: AluResult,
    /// Shared serial strobe.
    pub strobe: bool,
    /// Read enable.
    pub read_en: bool,
}
