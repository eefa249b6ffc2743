//! Serial Frame Transmitter (TX) Stage.
//!
//! This module implements the exit of the pipeline. It performs the following:
//! 1. **Capture:** Takes one result into its holding register while empty.
//! 2. **Serialization:** Presents the result frame on `miso` one nibble at a time,
//!    advancing on falling strobe edges.
//! 3. **Completion:** Frees the holding register and pulses `done` after the fifth nibble.
//!
//! Readiness is two-phase. [`capture_ready`](FrameTransmitter::capture_ready)
//! is the real transfer condition; [`res_ready`](FrameTransmitter::res_ready)
//! additionally re-asserts once serialization has started, but a result
//! offered then is not captured until the transmission completes.

use tracing::{debug, trace};

use crate::common::constants::RESULT_NIBBLES;
use crate::common::{Nibble, Result};
use crate::core::pipeline::latches::PipeReg;
use crate::core::pipeline::signals::{AluResult, TxInputs};
use crate::core::pipeline::traits::PipelineStage;
use crate::serial::frame::encode_result;
use crate::serial::strobe::EdgeDetector;

/// Serializes held results onto `miso`.
#[derive(Clone, Debug)]
pub struct FrameTransmitter {
    held: PipeReg<AluResult>,
    active: bool,
    index: usize,
    strobe: EdgeDetector,
    done: bool,
}

impl Default for FrameTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTransmitter {
    /// Creates an idle transmitter with an empty holding register.
    pub fn new() -> Self {
        Self {
            held: PipeReg::new("tx"),
            active: false,
            index: 0,
            strobe: EdgeDetector::new(),
            done: false,
        }
    }

    /// Whether a result offered this tick would be captured.
    #[inline]
    pub const fn capture_ready(&self) -> bool {
        !self.held.is_valid()
    }

    /// Advertised readiness.
    #[inline]
    pub const fn res_ready(&self) -> bool {
        self.capture_ready() || self.active
    }

    /// Whether a frame is being shifted out.
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Index of the nibble currently on `miso`.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The held result, if any.
    pub const fn held(&self) -> Option<&AluResult> {
        self.held.peek()
    }

    /// Serial output nibble; zero when not transmitting.
    pub const fn miso(&self) -> Nibble {
        if self.active {
            encode_result(*self.held.data())[self.index]
        } else {
            Nibble::ZERO
        }
    }

    /// One-tick pulse after the last nibble.
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Combinational pass-through of the carry line.
    #[inline]
    pub const fn carry_out(carry_in: bool) -> bool {
        carry_in
    }
}

impl PipelineStage for FrameTransmitter {
    type Inputs = TxInputs;

    fn tick(&mut self, inputs: &TxInputs) -> Result<()> {
        let falling = self.strobe.falling(inputs.strobe);
        self.strobe.sample(inputs.strobe);
        self.done = false;

        let mut finished = false;
        if self.active {
            if falling && inputs.read_en {
                if self.index + 1 == RESULT_NIBBLES {
                    finished = true;
                } else {
                    self.index += 1;
                    trace!(index = self.index, nibble = %self.miso(), "tx shift");
                }
            }
        } else if inputs.read_en && self.held.is_valid() {
            self.active = true;
            self.index = 0;
            debug!(result = %self.held.data(), "tx start");
        }

        let incoming = (inputs.res_valid && self.capture_ready()).then_some(inputs.result);
        if let Some(result) = incoming {
            debug!(%result, "tx capture");
        }
        let _sent = self.held.commit(finished, incoming)?;

        if finished {
            self.active = false;
            self.index = 0;
            self.done = true;
            debug!("tx done");
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
