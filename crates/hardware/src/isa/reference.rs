//! Closed-form arithmetic model of every opcode.
//!
//! This is written directly from the per-opcode formulas rather than from the
//! control table, so it is an independent check on the decoder and datapath.
//! Lane arithmetic follows the hardware widths: pre-adders wrap at 5 bits,
//! packed lanes keep their low 5 bits, and post-combines produce an 11-bit
//! intermediate whose bit 10 is the carry.

use super::instruction::Instruction;
use super::opcodes::Opcode;
use crate::common::constants::{CARRY_BIT, LANE5_BITS, LANE5_MASK, POST_MASK, RESULT_MASK};
use crate::core::pipeline::signals::AluResult;

/// 11-bit add or subtract of two 10-bit values.
const fn add10(x: u16, y: u16, sub: bool) -> AluResult {
    let (x, y) = (x & RESULT_MASK, y & RESULT_MASK);
    let raw = if sub { x.wrapping_sub(y) } else { x + y };
    let wide = raw & POST_MASK;
    AluResult::new(wide & RESULT_MASK, (wide >> CARRY_BIT) & 1 == 1)
}

/// Packs two lane values, keeping the low 5 bits of each.
const fn pack(hi: u16, lo: u16) -> AluResult {
    AluResult::new(((hi & LANE5_MASK) << LANE5_BITS) | (lo & LANE5_MASK), false)
}

const fn diff5(a: u16, b: u16) -> u16 {
    a.wrapping_sub(b) & LANE5_MASK
}

/// Returns the `(value, carry)` the MAU must produce for `inst`.
pub const fn evaluate(inst: &Instruction) -> AluResult {
    let (a1, a2) = (inst.a1.wide(), inst.a2.wide());
    let (b1, b2) = (inst.b1.wide(), inst.b2.wide());

    match inst.opcode() {
        Opcode::Noop => pack(a2, b2),
        Opcode::Dot2 | Opcode::Wsum | Opcode::Proju | Opcode::Sumsq | Opcode::Scsum => {
            add10(a1 * a2, b1 * b2, false)
        }
        Opcode::Vadd2 => pack(a1 + a2, b1 + b2),
        Opcode::Vsub2 => pack(diff5(a1, a2), diff5(b1, b2)),
        Opcode::Diff2 | Opcode::Det2 | Opcode::Diffsq => add10(a1 * a2, b1 * b2, true),
        Opcode::Dist2 => {
            let dx = diff5(a1, a2);
            let dy = diff5(b1, b2);
            add10(dx * dx, dy * dy, true)
        }
        Opcode::Poly => {
            let sx = (a1 + a2) & LANE5_MASK;
            add10((sx << LANE5_BITS) | a2, (b1 << LANE5_BITS) | b2, false)
        }
        Opcode::Scmul => pack(a1 * a2, b1 * b2),
        Opcode::Lerpx => add10(a1, a2 * diff5(b1, b2), false),
        Opcode::Lerpy => add10(b1, b2 * diff5(a1, a2), false),
    }
}
