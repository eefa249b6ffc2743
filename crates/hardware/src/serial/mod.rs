//! Serial framing layer.
//!
//! 1. **Strobe:** Edge detection on the shared serial strobe.
//! 2. **Frame:** The five-nibble result frame carried on `miso`.

/// Result frame encode/decode.
pub mod frame;

/// Strobe edge detector.
pub mod strobe;

pub use frame::{decode_result, encode_result};
pub use strobe::EdgeDetector;
