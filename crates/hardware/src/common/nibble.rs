//! The 4-bit nibble type.
//!
//! Operands, opcodes and serial data lines are all 4 bits wide. `Nibble`
//! makes the width part of the type so out-of-range values cannot reach the
//! datapath.

use std::fmt;

use super::constants::NIBBLE_MASK;
use super::error::MauError;

/// A 4-bit unsigned value in `0..=15`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nibble(u8);

impl Nibble {
    /// The all-zero nibble.
    pub const ZERO: Self = Self(0);

    /// The all-ones nibble.
    pub const MAX: Self = Self(NIBBLE_MASK);

    /// Keeps the low 4 bits of `value`, as a 4-bit wire would.
    #[inline(always)]
    pub const fn truncate(value: u8) -> Self {
        Self(value & NIBBLE_MASK)
    }

    /// Returns the raw value.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns the value widened for lane arithmetic.
    #[inline(always)]
    pub const fn wide(self) -> u16 {
        self.0 as u16
    }
}

impl TryFrom<u8> for Nibble {
    type Error = MauError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > NIBBLE_MASK {
            return Err(MauError::NibbleOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> Self {
        n.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
