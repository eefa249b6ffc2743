//! ALU Execute Stage.
//!
//! This module implements the arithmetic stage of the pipeline. It performs the following:
//! 1. **Command Accept:** Takes one command while idle.
//! 2. **Datapath Evaluation:** Runs the command through the combinational datapath.
//! 3. **Result Hold:** Keeps the result valid until downstream accepts it.

use tracing::debug;

use crate::common::Result;
use crate::core::pipeline::latches::PipeReg;
use crate::core::pipeline::signals::{AluInputs, AluResult};
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::alu::Datapath;

/// Handshake state of the ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluState {
    /// Ready for a command.
    #[default]
    Idle,
    /// Holding a result for downstream.
    Holding,
}

/// ALU stage: datapath plus a one-slot result register.
#[derive(Clone, Debug)]
pub struct AluCore {
    slot: PipeReg<AluResult>,
}

impl Default for AluCore {
    fn default() -> Self {
        Self::new()
    }
}

impl AluCore {
    /// Creates an idle ALU with cleared result registers.
    pub fn new() -> Self {
        Self {
            slot: PipeReg::new("alu"),
        }
    }

    /// Current handshake state.
    pub const fn state(&self) -> AluState {
        if self.slot.is_valid() {
            AluState::Holding
        } else {
            AluState::Idle
        }
    }

    /// Command readiness; high only while idle.
    #[inline]
    pub const fn cmd_ready(&self) -> bool {
        !self.slot.is_valid()
    }

    /// Result valid; high only while holding.
    #[inline]
    pub const fn res_valid(&self) -> bool {
        self.slot.is_valid()
    }

    /// Result registers. They keep their last value after consumption.
    pub const fn result(&self) -> AluResult {
        *self.slot.data()
    }
}

impl PipelineStage for AluCore {
    type Inputs = AluInputs;

    fn tick(&mut self, inputs: &AluInputs) -> Result<()> {
        let accept = inputs.cmd_valid && self.cmd_ready();
        let incoming = accept.then(|| Datapath::execute(&inputs.command));
        if let Some(result) = incoming {
            debug!(%result, "alu result");
        }
        if let Some(result) = self.slot.commit(inputs.res_ready, incoming)? {
            debug!(%result, "alu result consumed");
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.slot.clear();
    }
}
