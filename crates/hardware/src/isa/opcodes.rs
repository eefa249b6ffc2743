//! MAU opcodes.
//!
//! The opcode field is a full nibble, so every one of the 16 encodings is a
//! defined operation. Families that currently share a control word (for
//! example DOT2/WSUM/PROJU/SUMSQ/SCSUM) are still distinct variants so that
//! they can diverge later without touching the wire format.

use std::fmt;
use std::str::FromStr;

use crate::common::{MauError, Nibble};

/// A 4-bit MAU opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    /// Default datapath: `{a2, b2}` packed.
    #[default]
    Noop = 0x0,
    /// Two-element dot product `a1*a2 + b1*b2`.
    Dot2 = 0x1,
    /// Weighted sum (shares the DOT2 datapath).
    Wsum = 0x2,
    /// Projection numerator (shares the DOT2 datapath).
    Proju = 0x3,
    /// Sum of squares (shares the DOT2 datapath).
    Sumsq = 0x4,
    /// Scaled sum (shares the DOT2 datapath).
    Scsum = 0x5,
    /// Lane-wise add, packed `{a1+a2, b1+b2}`.
    Vadd2 = 0x6,
    /// Lane-wise subtract, packed `{a1-a2, b1-b2}`.
    Vsub2 = 0x7,
    /// Product difference `a1*a2 - b1*b2`.
    Diff2 = 0x8,
    /// 2x2 determinant (shares the DIFF2 datapath).
    Det2 = 0x9,
    /// Difference of squares (shares the DIFF2 datapath).
    Diffsq = 0xA,
    /// Squared-difference delta `(a1-a2)^2 - (b1-b2)^2`.
    Dist2 = 0xB,
    /// Packed `{a1+a2, a2} + {b1, b2}`.
    Poly = 0xC,
    /// Lane-wise product, packed low 5 bits.
    Scmul = 0xD,
    /// `a1 + a2*(b1-b2)`.
    Lerpx = 0xE,
    /// `b1 + b2*(a1-a2)`.
    Lerpy = 0xF,
}

impl Opcode {
    /// Every opcode in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Noop,
        Self::Dot2,
        Self::Wsum,
        Self::Proju,
        Self::Sumsq,
        Self::Scsum,
        Self::Vadd2,
        Self::Vsub2,
        Self::Diff2,
        Self::Det2,
        Self::Diffsq,
        Self::Dist2,
        Self::Poly,
        Self::Scmul,
        Self::Lerpx,
        Self::Lerpy,
    ];

    /// Decodes an opcode field. Total: every nibble is an opcode.
    #[inline]
    pub const fn from_nibble(n: Nibble) -> Self {
        Self::ALL[n.val() as usize]
    }

    /// Returns the 4-bit encoding.
    #[inline]
    pub const fn nibble(self) -> Nibble {
        Nibble::truncate(self as u8)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Noop => "NOOP",
            Self::Dot2 => "DOT2",
            Self::Wsum => "WSUM",
            Self::Proju => "PROJU",
            Self::Sumsq => "SUMSQ",
            Self::Scsum => "SCSUM",
            Self::Vadd2 => "VADD2",
            Self::Vsub2 => "VSUB2",
            Self::Diff2 => "DIFF2",
            Self::Det2 => "DET2",
            Self::Diffsq => "DIFFSQ",
            Self::Dist2 => "DIST2",
            Self::Poly => "POLY",
            Self::Scmul => "SCMUL",
            Self::Lerpx => "LERPX",
            Self::Lerpy => "LERPY",
        }
    }
}

impl From<Nibble> for Opcode {
    fn from(n: Nibble) -> Self {
        Self::from_nibble(n)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = MauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MauError::UnknownOpcode(s.to_owned()))
    }
}
