
/// Instruction nibble and word forms.
pub mod instruction;

/// Mnemonics and encodings.
pub mod opcodes;
