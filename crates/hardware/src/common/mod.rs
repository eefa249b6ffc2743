//! Common types and constants shared by every MAU stage.
//!
//! 1. **Nibble:** The 4-bit value type carried on every operand and data line.
//! 2. **Constants:** Lane widths, result masks and frame sizes.
//! 3. **Error Handling:** The crate-wide [`MauError`] and [`Result`] alias.

/// Datapath widths, masks and frame sizes.
pub mod constants;

/// Error types.
pub mod error;

/// The 4-bit nibble type.
pub mod nibble;

pub use error::{MauError, Result};
pub use nibble::Nibble;
