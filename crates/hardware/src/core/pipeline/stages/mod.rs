//! Pipeline stage implementations.
//!
//! This module contains the four clocked stages of the unit, in data-flow order:
//! 1. **Receive:** Assembles five serial nibbles into an instruction.
//! 2. **Decode:** Maps the opcode to a control word and registers the routed command.
//! 3. **Execute:** Runs the datapath and holds the result until consumed.
//! 4. **Transmit:** Serializes the held result onto `miso`.

/// Opcode decode stage.
pub mod decode;

/// ALU execute stage.
pub mod execute;

/// Serial frame receiver stage.
pub mod receive;

/// Serial frame transmitter stage.
pub mod transmit;

/// Decode stage (DECODE).
pub use decode::OpcodeDecoder;
/// Execute stage (ALU).
pub use execute::{AluCore, AluState};
/// Receive stage (RX).
pub use receive::FrameReceiver;
/// Transmit stage (TX).
pub use transmit::FrameTransmitter;
