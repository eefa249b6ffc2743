//! MAU instruction set.
//!
//! 1. **Opcodes:** The 16 operations selectable by the opcode nibble.
//! 2. **Instructions:** The five-field instruction and its wire/word forms.
//! 3. **Control:** The control word and the opcode table the decoder indexes.
//! 4. **Reference:** A closed-form model of every opcode for verification.

/// ALU control words and the opcode table.
pub mod control;

/// Instruction representation.
pub mod instruction;

/// Opcode enumeration.
pub mod opcodes;

/// Closed-form arithmetic model.
pub mod reference;

pub use control::{CONTROL_TABLE, ControlWord, LaneControl, MulSel, ReservedSel};
pub use instruction::Instruction;
pub use opcodes::Opcode;
