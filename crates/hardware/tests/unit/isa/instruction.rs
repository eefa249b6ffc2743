//! # Instruction Tests

use mau_core::common::Nibble;
use mau_core::isa::{Instruction, Opcode};
use pretty_assertions::assert_eq;

#[test]
fn test_instruction_fields() {
    let inst = Instruction::new(Opcode::Vadd2, 0x1, 0x2, 0x3, 0x4);
    assert_eq!(inst.opcode(), Opcode::Vadd2);
    assert_eq!(inst.to_nibbles().map(Nibble::val), [0x6, 0x1, 0x2, 0x3, 0x4]);
}

#[test]
fn test_operands_truncate_to_nibbles() {
    let inst = Instruction::new(Opcode::Dot2, 0x1F, 0x20, 0xFF, 0x7);
    assert_eq!(inst.to_nibbles().map(Nibble::val), [0x1, 0xF, 0x0, 0xF, 0x7]);
}

#[test]
fn test_word_form() {
    let inst = Instruction::new(Opcode::Vadd2, 0x1, 0x2, 0x3, 0x4);
    assert_eq!(inst.to_word(), 0x6_1234);
    assert_eq!(Instruction::from_word(0x6_1234), inst);
    assert_eq!(Instruction::from_word(0xFFF6_1234), inst);
}

#[test]
fn test_nibble_form() {
    let n = [0xF, 0xE, 0xD, 0xC, 0xB].map(Nibble::truncate);
    let inst = Instruction::from_nibbles(n);
    assert_eq!(inst.opcode(), Opcode::Lerpy);
    assert_eq!(inst.to_nibbles(), n);
}

#[test]
fn test_display() {
    let inst = Instruction::new(Opcode::Dist2, 5, 2, 3, 1);
    assert_eq!(inst.to_string(), "DIST2 a=(5, 2) b=(3, 1)");
}

#[test]
fn test_default_is_noop() {
    assert_eq!(Instruction::default().opcode(), Opcode::Noop);
    assert_eq!(Instruction::default().to_word(), 0);
}
