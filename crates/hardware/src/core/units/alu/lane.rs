//! Per-lane datapath: pre-adder, multiplicand selector, multiplier.
//!
//! Each lane sees its own two operands plus the opposite lane's second
//! operand. All intermediate widths follow the hardware: the pre-adder and
//! selector are 5 bits, the multiplier output is 10 bits.

use crate::common::constants::{LANE5_BITS, LANE5_MASK, RESULT_MASK};
use crate::isa::control::{LaneControl, MulSel};

/// Operands visible to one lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaneOperands {
    /// The lane's first operand.
    pub in0: u16,
    /// The lane's second operand.
    pub in1: u16,
    /// The opposite lane's second operand.
    pub cross: u16,
}

/// 5-bit pre-adder. Disabled, it zero-extends `in0`.
#[inline]
pub const fn pre_add(ops: LaneOperands, ctrl: LaneControl) -> u16 {
    if !ctrl.pre_en {
        return ops.in0 & LANE5_MASK;
    }
    let sum = if ctrl.pre_sub {
        ops.in0.wrapping_sub(ops.in1)
    } else {
        ops.in0.wrapping_add(ops.in1)
    };
    sum & LANE5_MASK
}

/// Second multiplicand. Reserved encodings select 0.
#[inline]
pub const fn select(ops: LaneOperands, pre: u16, sel: MulSel) -> u16 {
    let v = match sel {
        MulSel::In0 => ops.in0,
        MulSel::In1 => ops.in1,
        MulSel::PreAdd => pre,
        MulSel::CrossLane => ops.cross,
        MulSel::One => 1,
        MulSel::Reserved(_) => 0,
    };
    v & LANE5_MASK
}

/// 5x5 unsigned multiply, or `{pre, sel}` concatenation when disabled.
#[inline]
pub const fn multiply(pre: u16, sel: u16, mul_en: bool) -> u16 {
    let (pre, sel) = (pre & LANE5_MASK, sel & LANE5_MASK);
    let out = if mul_en {
        pre * sel
    } else {
        (pre << LANE5_BITS) | sel
    };
    out & RESULT_MASK
}

/// Runs one lane end to end and returns its 10-bit product.
pub const fn evaluate(ops: LaneOperands, ctrl: LaneControl) -> u16 {
    let pre = pre_add(ops, ctrl);
    let sel = select(ops, pre, ctrl.mul_sel);
    multiply(pre, sel, ctrl.mul_en)
}
