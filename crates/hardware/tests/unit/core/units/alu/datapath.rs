//! # Datapath Tests
//!
//! The control-table-driven datapath against the closed-form reference.

use mau_core::core::pipeline::signals::{AluResult, Command};
use mau_core::core::units::alu::Datapath;
use mau_core::isa::reference;
use mau_core::isa::{Instruction, Opcode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn run(op: Opcode, a1: u8, a2: u8, b1: u8, b2: u8) -> AluResult {
    Datapath::execute(&Command::route(&Instruction::new(op, a1, a2, b1, b2)))
}

#[test]
fn test_datapath_matches_reference_exhaustively() {
    for op in Opcode::ALL {
        for operands in 0..=u16::MAX {
            let [a1, a2, b1, b2] = [12, 8, 4, 0].map(|s| ((operands >> s) & 0xF) as u8);
            let inst = Instruction::new(op, a1, a2, b1, b2);
            let got = Datapath::execute(&Command::route(&inst));
            let want = reference::evaluate(&inst);
            assert_eq!(got, want, "{inst}");
        }
    }
}

#[rstest]
#[case(Opcode::Dot2, [3, 4, 5, 6], 42, false)]
#[case(Opcode::Vadd2, [1, 2, 3, 4], 0x67, false)]
#[case(Opcode::Vsub2, [1, 2, 3, 4], 0x3FF, false)]
#[case(Opcode::Diff2, [2, 3, 4, 5], 1010, true)]
#[case(Opcode::Dist2, [0, 0, 1, 2], 63, true)]
#[case(Opcode::Poly, [0xF, 0xF, 0xF, 0xF], 446, true)]
#[case(Opcode::Scmul, [0xF, 0xF, 0xF, 0xF], 33, false)]
#[case(Opcode::Lerpx, [2, 3, 7, 4], 11, false)]
#[case(Opcode::Lerpy, [7, 4, 2, 3], 11, false)]
#[case(Opcode::Noop, [1, 2, 3, 4], 68, false)]
fn test_datapath_vectors(
    #[case] op: Opcode,
    #[case] operands: [u8; 4],
    #[case] value: u16,
    #[case] carry: bool,
) {
    let [a1, a2, b1, b2] = operands;
    assert_eq!(run(op, a1, a2, b1, b2), AluResult::new(value, carry));
}

#[test]
fn test_result_within_ten_bits() {
    for op in Opcode::ALL {
        assert!(run(op, 0xF, 0xF, 0xF, 0xF).value <= 0x3FF, "{op}");
    }
}

#[test]
fn test_packed_ops_never_carry() {
    for op in [Opcode::Noop, Opcode::Vadd2, Opcode::Vsub2, Opcode::Scmul] {
        for v in [0x0, 0x7, 0xF] {
            assert!(!run(op, v, 0xF, v, 0x1).carry, "{op}");
        }
    }
}

fn any_opcode() -> impl Strategy<Value = Opcode> {
    (0u8..16).prop_map(|n| Opcode::from_nibble(mau_core::common::Nibble::truncate(n)))
}

proptest! {
    #[test]
    fn prop_dot_family_is_product_sum(a1 in 0u8..16, a2 in 0u8..16, b1 in 0u8..16, b2 in 0u8..16) {
        let expected = u16::from(a1) * u16::from(a2) + u16::from(b1) * u16::from(b2);
        for op in [Opcode::Dot2, Opcode::Wsum, Opcode::Proju, Opcode::Sumsq, Opcode::Scsum] {
            prop_assert_eq!(run(op, a1, a2, b1, b2), AluResult::new(expected, false));
        }
    }

    #[test]
    fn prop_diff_family_wraps_with_borrow(a1 in 0u8..16, a2 in 0u8..16, b1 in 0u8..16, b2 in 0u8..16) {
        let x = i32::from(a1) * i32::from(a2);
        let y = i32::from(b1) * i32::from(b2);
        let wide = (x - y).rem_euclid(1 << 11);
        let res = run(Opcode::Diff2, a1, a2, b1, b2);
        prop_assert_eq!(i32::from(res.value), wide & 0x3FF);
        prop_assert_eq!(res.carry, x < y);
    }

    #[test]
    fn prop_datapath_is_deterministic(op in any_opcode(), a1 in 0u8..16, a2 in 0u8..16, b1 in 0u8..16, b2 in 0u8..16) {
        prop_assert_eq!(run(op, a1, a2, b1, b2), run(op, a1, a2, b1, b2));
    }
}
