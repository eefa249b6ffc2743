
/// The 4-bit nibble type.
pub mod nibble;
