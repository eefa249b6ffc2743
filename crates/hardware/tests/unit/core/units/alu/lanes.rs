//! # Lane Primitive Tests

use mau_core::core::pipeline::signals::AluResult;
use mau_core::core::units::alu::combine::combine;
use mau_core::core::units::alu::lane::{self, LaneOperands};
use mau_core::isa::{LaneControl, MulSel};
use pretty_assertions::assert_eq;

const OPS: LaneOperands = LaneOperands {
    in0: 0x9,
    in1: 0xC,
    cross: 0x3,
};

fn ctrl(pre_en: bool, pre_sub: bool, mul_en: bool, mul_sel: MulSel) -> LaneControl {
    LaneControl {
        pre_en,
        pre_sub,
        mul_en,
        mul_sel,
    }
}

#[test]
fn test_pre_adder() {
    assert_eq!(lane::pre_add(OPS, ctrl(false, false, false, MulSel::In0)), 0x9);
    assert_eq!(lane::pre_add(OPS, ctrl(false, true, false, MulSel::In0)), 0x9);
    assert_eq!(lane::pre_add(OPS, ctrl(true, false, false, MulSel::In0)), 21);
    // 9 - 12 wraps at five bits
    assert_eq!(lane::pre_add(OPS, ctrl(true, true, false, MulSel::In0)), 29);
}

#[test]
fn test_selector() {
    let pre = 21;
    assert_eq!(lane::select(OPS, pre, MulSel::In0), 0x9);
    assert_eq!(lane::select(OPS, pre, MulSel::In1), 0xC);
    assert_eq!(lane::select(OPS, pre, MulSel::PreAdd), 21);
    assert_eq!(lane::select(OPS, pre, MulSel::CrossLane), 0x3);
    assert_eq!(lane::select(OPS, pre, MulSel::One), 1);
    for bits in 5..8 {
        assert_eq!(lane::select(OPS, pre, MulSel::from_bits(bits)), 0);
    }
}

#[test]
fn test_multiplier() {
    assert_eq!(lane::multiply(31, 31, true), 961);
    assert_eq!(lane::multiply(0x9, 0xC, false), (0x9 << 5) | 0xC);
    assert_eq!(lane::multiply(31, 31, false), 0x3FF);
}

#[test]
fn test_lane_end_to_end() {
    // (9 + 12) * 3
    assert_eq!(lane::evaluate(OPS, ctrl(true, false, true, MulSel::CrossLane)), 63);
    // (9 - 12) squared at five bits: 29 * 29
    assert_eq!(lane::evaluate(OPS, ctrl(true, true, true, MulSel::PreAdd)), 841);
    // reserved selector zeroes the product
    assert_eq!(lane::evaluate(OPS, ctrl(false, false, true, MulSel::from_bits(6))), 0);
}

#[test]
fn test_combine_pack() {
    assert_eq!(combine(0x3E5, 0x01F, false, false), AluResult::new((0x5 << 5) | 0x1F, false));
    assert_eq!(combine(0x3FF, 0x3FF, false, true), AluResult::new(0x3FF, false));
}

#[test]
fn test_combine_add_sub() {
    assert_eq!(combine(600, 500, true, false), AluResult::new(76, true));
    assert_eq!(combine(500, 600, true, true), AluResult::new(924, true));
    assert_eq!(combine(600, 500, true, true), AluResult::new(100, false));
    assert_eq!(combine(0, 0, true, true), AluResult::new(0, false));
}
