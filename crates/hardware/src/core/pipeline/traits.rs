//! Pipeline stage interface.
//!
//! Every stage is a clocked component with registered outputs. The top level
//! reads all outputs through accessors first, builds each stage's inputs,
//! and only then calls [`PipelineStage::tick`] on every stage. A stage
//! therefore never observes another stage's in-progress update.

use crate::common::Result;

/// A clocked pipeline component.
pub trait PipelineStage {
    /// Signals sampled on a clock edge.
    type Inputs;

    /// Applies one clock edge.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Signal values sampled for this tick.
    ///
    /// # Errors
    ///
    /// Returns an error only if an internal pipeline register is misused;
    /// protocol stalls are never errors.
    fn tick(&mut self, inputs: &Self::Inputs) -> Result<()>;

    /// Synchronous reset: every register returns to zero or empty.
    fn reset(&mut self);
}
