//! Opcode Decode (DECODE) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Control Lookup:** Indexes the opcode table for the ALU control word.
//! 2. **Operand Routing:** Maps `a1, a2, b1, b2` onto `x0, x1, y0, y1`.
//! 3. **Registration:** Holds the command in a one-slot register until the ALU takes it.

use tracing::debug;

use crate::common::Result;
use crate::core::pipeline::latches::PipeReg;
use crate::core::pipeline::signals::{Command, DecodeInputs};
use crate::core::pipeline::traits::PipelineStage;

/// Registered opcode decoder.
#[derive(Clone, Debug)]
pub struct OpcodeDecoder {
    out: PipeReg<Command>,
}

impl Default for OpcodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpcodeDecoder {
    /// Creates a decoder with an empty output register.
    pub fn new() -> Self {
        Self {
            out: PipeReg::new("decode"),
        }
    }

    /// Upstream readiness: a combinational copy of downstream readiness.
    #[inline]
    pub const fn ready_out(downstream_ready: bool) -> bool {
        downstream_ready
    }

    /// Whether a command is registered.
    #[inline]
    pub const fn valid(&self) -> bool {
        self.out.is_valid()
    }

    /// The registered command (meaningful only while valid).
    pub const fn command(&self) -> &Command {
        self.out.data()
    }
}

impl PipelineStage for OpcodeDecoder {
    type Inputs = DecodeInputs;

    fn tick(&mut self, inputs: &DecodeInputs) -> Result<()> {
        let accept = inputs.valid && Self::ready_out(inputs.downstream_ready);
        let incoming = accept.then(|| Command::route(&inputs.instruction));
        if accept {
            debug!(instruction = %inputs.instruction, "decode register");
        }
        let _issued = self.out.commit(inputs.downstream_ready, incoming)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.out.clear();
    }
}
