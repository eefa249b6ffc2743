//! Simulation top level.
//!
//! Provides the pin-level [`Mau`] and a host driver that runs the serial
//! protocol against it.

/// Host-side serial driver.
pub mod host;

/// Top-level unit with pin interface.
pub mod simulator;

pub use host::{Readout, SerialHost};
pub use simulator::{Mau, PinInputs, PinOutputs};
