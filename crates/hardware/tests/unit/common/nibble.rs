//! # Nibble Tests

use mau_core::common::{MauError, Nibble};

#[test]
fn test_truncate_keeps_low_bits() {
    assert_eq!(Nibble::truncate(0x1F).val(), 0xF);
    assert_eq!(Nibble::truncate(0x30).val(), 0x0);
    assert_eq!(Nibble::truncate(0xA).val(), 0xA);
}

#[test]
fn test_try_from_range() {
    for v in 0..=15u8 {
        assert_eq!(Nibble::try_from(v).unwrap().val(), v);
    }
    assert!(matches!(
        Nibble::try_from(16),
        Err(MauError::NibbleOutOfRange(16))
    ));
    assert!(matches!(
        Nibble::try_from(0xFF),
        Err(MauError::NibbleOutOfRange(0xFF))
    ));
}

#[test]
fn test_constants_and_widening() {
    assert_eq!(Nibble::ZERO.val(), 0);
    assert_eq!(Nibble::MAX.val(), 15);
    assert_eq!(Nibble::MAX.wide(), 15u16);
    assert_eq!(u8::from(Nibble::truncate(7)), 7);
    assert_eq!(Nibble::default(), Nibble::ZERO);
}

#[test]
fn test_formatting() {
    assert_eq!(Nibble::truncate(0xA).to_string(), "0xa");
    assert_eq!(format!("{:x}", Nibble::truncate(0xC)), "c");
}
