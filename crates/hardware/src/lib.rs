//! Math Accelerator Unit (MAU) simulator library.
//!
//! This crate implements a cycle-accurate model of a small 4-bit
//! multiply/accumulate pipeline with the following:
//! 1. **Pipeline:** Serial receiver, opcode decoder, ALU and serial transmitter joined by valid/ready handshakes.
//! 2. **Datapath:** A two-lane pre-adder, multiplier and post-combine configured per opcode.
//! 3. **ISA:** Sixteen opcodes, their control table and a closed-form reference model.
//! 4. **Serial:** Strobe edge detection and the five-nibble result frame.
//! 5. **Simulation:** Pin-level top level, host driver, configuration and statistics.
//!
//! ```
//! use mau_core::isa::{Instruction, Opcode};
//! use mau_core::{Config, SerialHost};
//!
//! let mut host = SerialHost::from_config(&Config::default()).unwrap();
//! host.reset().unwrap();
//! let result = host.transact(&Instruction::new(Opcode::Vadd2, 1, 2, 3, 4)).unwrap();
//! assert_eq!(result.value, 0x67);
//! assert!(!result.carry);
//! ```

/// Common types and constants (nibbles, widths, errors).
pub mod common;
/// Configuration (serial timing, tracing).
pub mod config;
/// Pipeline stages and datapath.
pub mod core;
/// Instruction set (opcodes, control table, reference model).
pub mod isa;
/// Serial framing (strobe edges, result frame).
pub mod serial;
/// Top-level unit and host driver.
pub mod sim;
/// Handshake statistics.
pub mod stats;

/// Crate error type.
pub use crate::common::MauError;
/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// The unit; drive it with `PinInputs` one tick at a time.
pub use crate::sim::Mau;
/// Host driver running the serial protocol against a `Mau`.
pub use crate::sim::SerialHost;
