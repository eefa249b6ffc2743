//! Core of the unit.
//!
//! This module contains the clocked pipeline stages and the combinational
//! datapath they drive.

/// Pipeline stages, latches and signals.
pub mod pipeline;

/// Combinational execution units.
pub mod units;

pub use self::pipeline::traits::PipelineStage;
