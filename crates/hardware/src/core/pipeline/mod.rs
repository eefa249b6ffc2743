//! Handshaked four-stage pipeline.
//!
//! This module wires data from the serial receiver to the serial transmitter.
//! It includes the following components:
//! 1. **Latches:** The one-slot valid/ready register used at every stage boundary.
//! 2. **Signals:** Inter-stage payloads and per-tick stage inputs.
//! 3. **Stages:** RX, DECODE, ALU and TX.
//! 4. **Traits:** The clocked-stage interface.

/// One-slot handshake register.
pub mod latches;

/// Payloads and stage inputs.
pub mod signals;

/// Pipeline stage implementations (receive, decode, execute, transmit).
pub mod stages;

/// Clocked-stage trait.
pub mod traits;
