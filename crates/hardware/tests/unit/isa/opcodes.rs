//! # Opcode Tests

use mau_core::MauError;
use mau_core::common::Nibble;
use mau_core::isa::Opcode;
use pretty_assertions::assert_eq;

#[test]
fn test_every_nibble_is_an_opcode() {
    for n in 0..16u8 {
        let op = Opcode::from_nibble(Nibble::truncate(n));
        assert_eq!(op.nibble().val(), n);
        assert_eq!(op as u8, n);
        assert_eq!(Opcode::from(Nibble::truncate(n)), op);
    }
}

#[test]
fn test_all_in_encoding_order() {
    assert_eq!(Opcode::ALL.len(), 16);
    assert!(Opcode::ALL.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_mnemonics_round_trip() {
    for op in Opcode::ALL {
        assert_eq!(op.mnemonic().parse::<Opcode>().unwrap(), op);
        assert_eq!(op.to_string(), op.mnemonic());
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("dot2".parse::<Opcode>().unwrap(), Opcode::Dot2);
    assert_eq!("  LerpX ".parse::<Opcode>().unwrap(), Opcode::Lerpx);
}

#[test]
fn test_parse_unknown() {
    let err = "MAC4".parse::<Opcode>().unwrap_err();
    assert!(matches!(err, MauError::UnknownOpcode(ref s) if s == "MAC4"));
}
