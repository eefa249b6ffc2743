//! Serial Frame Receiver (RX) Stage.
//!
//! This module implements the entry of the pipeline. It performs the following:
//! 1. **Edge Detection:** Samples the serial strobe every tick and captures on rising edges.
//! 2. **Field Assembly:** Latches `mosi` into `[op, a1, a2, b1, b2]` in order.
//! 3. **Handoff:** Pulses `valid` for one tick after the fifth field, gated by decoder readiness.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_NIBBLES;
use crate::common::{Nibble, Result};
use crate::core::pipeline::signals::RxInputs;
use crate::core::pipeline::traits::PipelineStage;
use crate::isa::instruction::Instruction;
use crate::serial::strobe::EdgeDetector;

/// Assembles five serial nibbles into an instruction.
///
/// The field counter only advances while write-enable is high and is held at
/// zero otherwise. An interrupted write leaves the fields it already latched
/// in place until a later write overwrites them.
#[derive(Clone, Debug, Default)]
pub struct FrameReceiver {
    strobe: EdgeDetector,
    counter: usize,
    fields: [Nibble; INSTRUCTION_NIBBLES],
    valid: bool,
    captured: bool,
    suppressed: bool,
}

impl FrameReceiver {
    /// Creates a receiver in its reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The latched fields as an instruction.
    pub const fn instruction(&self) -> Instruction {
        Instruction::from_nibbles(self.fields)
    }

    /// One-tick pulse announcing a complete instruction.
    #[inline]
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// Number of fields captured in the current write (0..=5).
    pub const fn counter(&self) -> usize {
        self.counter
    }

    /// Whether the last tick latched a nibble.
    pub const fn captured(&self) -> bool {
        self.captured
    }

    /// Whether the last tick completed an instruction the decoder could not take.
    pub const fn suppressed(&self) -> bool {
        self.suppressed
    }
}

impl PipelineStage for FrameReceiver {
    type Inputs = RxInputs;

    fn tick(&mut self, inputs: &RxInputs) -> Result<()> {
        let rising = self.strobe.rising(inputs.strobe);
        self.strobe.sample(inputs.strobe);

        self.valid = false;
        self.captured = false;
        self.suppressed = false;

        if !inputs.write_en {
            self.counter = 0;
            return Ok(());
        }
        if !rising || self.counter >= INSTRUCTION_NIBBLES {
            return Ok(());
        }

        self.fields[self.counter] = inputs.data;
        self.counter += 1;
        self.captured = true;
        trace!(field = self.counter - 1, nibble = %inputs.data, "rx capture");

        if self.counter == INSTRUCTION_NIBBLES {
            self.valid = inputs.downstream_ready;
            self.suppressed = !inputs.downstream_ready;
            if self.suppressed {
                debug!(instruction = %self.instruction(), "rx instruction suppressed: decoder not ready");
            } else {
                debug!(instruction = %self.instruction(), "rx instruction complete");
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
