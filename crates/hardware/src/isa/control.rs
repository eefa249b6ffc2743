//! ALU control words and the opcode table.
//!
//! The decoder does no branching of its own: every opcode indexes a row of
//! [`CONTROL_TABLE`]. A row sets the switches of both lanes (pre-adder
//! enable/subtract, multiplier enable and second-input selector) and of the
//! post-combine adder.

use super::opcodes::Opcode;
use crate::common::constants::MUL_SEL_MASK;

/// Second multiplicand selector for one lane (3 bits on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MulSel {
    /// The lane's first operand.
    #[default]
    In0,
    /// The lane's second operand.
    In1,
    /// The lane's pre-adder result.
    PreAdd,
    /// The opposite lane's second operand.
    CrossLane,
    /// Constant 1 (multiplier as pass-through).
    One,
    /// Encodings 5 to 7; selects constant 0.
    Reserved(ReservedSel),
}

/// A reserved selector encoding (5, 6 or 7).
///
/// Only [`MulSel::from_bits`] constructs one, so the encoding always
/// survives a [`ControlWord::pack`]/[`ControlWord::unpack`] round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReservedSel(u8);

impl ReservedSel {
    /// Returns the 3-bit encoding.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl MulSel {
    /// Decodes a 3-bit selector field. Bits above bit 2 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & MUL_SEL_MASK {
            0 => Self::In0,
            1 => Self::In1,
            2 => Self::PreAdd,
            3 => Self::CrossLane,
            4 => Self::One,
            other => Self::Reserved(ReservedSel(other)),
        }
    }

    /// Returns the 3-bit encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::In0 => 0,
            Self::In1 => 1,
            Self::PreAdd => 2,
            Self::CrossLane => 3,
            Self::One => 4,
            Self::Reserved(sel) => sel.bits(),
        }
    }
}

/// Switch settings for one lane of the datapath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaneControl {
    /// Pre-adder enable; when clear the pre-adder passes `in0` through.
    pub pre_en: bool,
    /// Pre-adder subtracts instead of adding.
    pub pre_sub: bool,
    /// Multiplier enable; when clear the multiplier concatenates its inputs.
    pub mul_en: bool,
    /// Second multiplicand selector.
    pub mul_sel: MulSel,
}

/// The full ALU control word.
///
/// `Default` is the all-zero word a reset leaves in the decode register, not
/// the NOOP row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlWord {
    /// X-lane pre-adder enable.
    pub pre_x_en: bool,
    /// X-lane pre-adder subtract.
    pub pre_x_sub: bool,
    /// Y-lane pre-adder enable.
    pub pre_y_en: bool,
    /// Y-lane pre-adder subtract.
    pub pre_y_sub: bool,
    /// X-lane multiplier enable.
    pub mul_x_en: bool,
    /// Y-lane multiplier enable.
    pub mul_y_en: bool,
    /// X-lane second multiplicand selector.
    pub mul_x_sel: MulSel,
    /// Y-lane second multiplicand selector.
    pub mul_y_sel: MulSel,
    /// Post-combine enable; when clear the lanes are packed instead of added.
    pub post_en: bool,
    /// Post-combine subtracts the y lane from the x lane.
    pub post_sub: bool,
}

/// Width of [`ControlWord::pack`]'s output in bits.
pub const CONTROL_BITS: u32 = 14;

impl ControlWord {
    /// Returns the control word for `op`.
    #[inline]
    pub const fn for_opcode(op: Opcode) -> Self {
        CONTROL_TABLE[op as usize]
    }

    /// X-lane switches.
    pub const fn lane_x(&self) -> LaneControl {
        LaneControl {
            pre_en: self.pre_x_en,
            pre_sub: self.pre_x_sub,
            mul_en: self.mul_x_en,
            mul_sel: self.mul_x_sel,
        }
    }

    /// Y-lane switches.
    pub const fn lane_y(&self) -> LaneControl {
        LaneControl {
            pre_en: self.pre_y_en,
            pre_sub: self.pre_y_sub,
            mul_en: self.mul_y_en,
            mul_sel: self.mul_y_sel,
        }
    }

    /// Packs the word into a flat bit vector.
    ///
    /// Layout, LSB first: `pre_x_en`, `pre_x_sub`, `mul_x_en`, `mul_x_sel[2:0]`,
    /// `pre_y_en`, `pre_y_sub`, `mul_y_en`, `mul_y_sel[2:0]`, `post_en`,
    /// `post_sub`.
    pub const fn pack(&self) -> u16 {
        (self.pre_x_en as u16)
            | ((self.pre_x_sub as u16) << 1)
            | ((self.mul_x_en as u16) << 2)
            | ((self.mul_x_sel.bits() as u16) << 3)
            | ((self.pre_y_en as u16) << 6)
            | ((self.pre_y_sub as u16) << 7)
            | ((self.mul_y_en as u16) << 8)
            | ((self.mul_y_sel.bits() as u16) << 9)
            | ((self.post_en as u16) << 12)
            | ((self.post_sub as u16) << 13)
    }

    /// Inverse of [`pack`](Self::pack). Bits above bit 13 are ignored.
    pub const fn unpack(flat: u16) -> Self {
        Self {
            pre_x_en: bit(flat, 0),
            pre_x_sub: bit(flat, 1),
            mul_x_en: bit(flat, 2),
            mul_x_sel: MulSel::from_bits((flat >> 3) as u8),
            pre_y_en: bit(flat, 6),
            pre_y_sub: bit(flat, 7),
            mul_y_en: bit(flat, 8),
            mul_y_sel: MulSel::from_bits((flat >> 9) as u8),
            post_en: bit(flat, 12),
            post_sub: bit(flat, 13),
        }
    }
}

const fn bit(flat: u16, n: u32) -> bool {
    (flat >> n) & 1 == 1
}

/// Builds one table row from the 0/1 columns of the opcode table.
const fn row(
    pre_x: [u8; 2],
    mul_x: [u8; 2],
    pre_y: [u8; 2],
    mul_y: [u8; 2],
    post: [u8; 2],
) -> ControlWord {
    ControlWord {
        pre_x_en: pre_x[0] == 1,
        pre_x_sub: pre_x[1] == 1,
        mul_x_en: mul_x[0] == 1,
        mul_x_sel: MulSel::from_bits(mul_x[1]),
        pre_y_en: pre_y[0] == 1,
        pre_y_sub: pre_y[1] == 1,
        mul_y_en: mul_y[0] == 1,
        mul_y_sel: MulSel::from_bits(mul_y[1]),
        post_en: post[0] == 1,
        post_sub: post[1] == 1,
    }
}

const NOOP: ControlWord = row([0, 0], [0, 1], [0, 0], [0, 1], [0, 0]);
const DOT_FAMILY: ControlWord = row([0, 0], [1, 1], [0, 0], [1, 1], [1, 0]);
const VADD2: ControlWord = row([1, 0], [1, 4], [1, 0], [1, 4], [0, 0]);
const VSUB2: ControlWord = row([1, 1], [1, 4], [1, 1], [1, 4], [0, 0]);
const DIFF_FAMILY: ControlWord = row([0, 0], [1, 1], [0, 0], [1, 1], [1, 1]);
const DIST2: ControlWord = row([1, 1], [1, 2], [1, 1], [1, 2], [1, 1]);
const POLY: ControlWord = row([1, 0], [0, 1], [0, 0], [0, 1], [1, 0]);
const SCMUL: ControlWord = row([0, 0], [1, 1], [0, 0], [1, 1], [0, 0]);
const LERPX: ControlWord = row([0, 0], [1, 4], [1, 1], [1, 3], [1, 0]);
const LERPY: ControlWord = row([1, 1], [1, 3], [0, 0], [1, 4], [1, 0]);

/// Control word for every opcode, indexed by encoding.
pub const CONTROL_TABLE: [ControlWord; 16] = [
    NOOP,        // 0x0 NOOP
    DOT_FAMILY,  // 0x1 DOT2
    DOT_FAMILY,  // 0x2 WSUM
    DOT_FAMILY,  // 0x3 PROJU
    DOT_FAMILY,  // 0x4 SUMSQ
    DOT_FAMILY,  // 0x5 SCSUM
    VADD2,       // 0x6
    VSUB2,       // 0x7
    DIFF_FAMILY, // 0x8 DIFF2
    DIFF_FAMILY, // 0x9 DET2
    DIFF_FAMILY, // 0xA DIFFSQ
    DIST2,       // 0xB
    POLY,        // 0xC
    SCMUL,       // 0xD
    LERPX,       // 0xE
    LERPY,       // 0xF
];
