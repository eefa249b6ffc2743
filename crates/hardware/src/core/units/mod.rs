//! Execution units.
//!
//! Combinational logic evaluated by the pipeline stages.

/// Two-lane multiply/accumulate datapath.
pub mod alu;
