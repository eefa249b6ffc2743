//! Host-side serial driver.
//!
//! [`SerialHost`] owns a [`Mau`] and talks to it only through its pins,
//! toggling the strobe with the timing from [`SerialConfig`]. Each strobe
//! phase lasts `half_period` ticks.

use tracing::{debug, info};

use super::simulator::{Mau, PinInputs};
use crate::common::constants::RESULT_NIBBLES;
use crate::common::{MauError, Nibble, Result};
use crate::config::{Config, SerialConfig};
use crate::core::pipeline::signals::AluResult;
use crate::isa::instruction::Instruction;
use crate::serial::frame::decode_result;

/// Raw outcome of clocking one result frame out of the unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    /// Nibbles sampled from `miso`, in wire order.
    pub frame: [Nibble; RESULT_NIBBLES],
    /// Whether `done` was high after the last nibble.
    pub done: bool,
    /// The `carry_out` line at the end of the read.
    pub carry_out: bool,
}

/// Bit-banging host for a [`Mau`].
#[derive(Clone, Debug)]
pub struct SerialHost {
    mau: Mau,
    timing: SerialConfig,
    pins: PinInputs,
}

impl SerialHost {
    /// Wraps `mau` with the given timing.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::InvalidConfig`] if `timing` does not validate.
    pub fn new(mau: Mau, timing: SerialConfig) -> Result<Self> {
        timing.validate()?;
        Ok(Self {
            mau,
            timing,
            pins: PinInputs::default(),
        })
    }

    /// Builds a fresh unit and host from one configuration.
    ///
    /// # Errors
    ///
    /// See [`Config::validate`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(Mau::new(config), config.serial)
    }

    /// The driven unit.
    pub const fn mau(&self) -> &Mau {
        &self.mau
    }

    /// Releases the unit.
    pub const fn into_inner(self) -> Mau {
        self.mau
    }

    /// Current pin drive.
    pub const fn pins(&self) -> &PinInputs {
        &self.pins
    }

    /// Pin drive for hand-built sequences (interrupted writes, stalls).
    pub const fn pins_mut(&mut self) -> &mut PinInputs {
        &mut self.pins
    }

    /// Timing in use.
    pub const fn timing(&self) -> &SerialConfig {
        &self.timing
    }

    /// Ticks once with the current pin drive.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn tick(&mut self) -> Result<()> {
        self.mau.tick(&self.pins)
    }

    /// Ticks `n` times with the current pin drive.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn ticks(&mut self, n: u32) -> Result<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// Holds reset for `reset_cycles` ticks with every other pin low, then
    /// releases it for one tick.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn reset(&mut self) -> Result<()> {
        self.pins = PinInputs {
            reset: true,
            ..PinInputs::default()
        };
        self.ticks(self.timing.reset_cycles)?;
        self.pins.reset = false;
        self.tick()
    }

    /// Drives one nibble on `mosi` through a low-high-low strobe cycle.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn write_nibble(&mut self, nibble: Nibble) -> Result<()> {
        let half = self.timing.half_period;
        self.pins.mosi = nibble;
        self.pins.strobe = false;
        self.ticks(half)?;
        self.pins.strobe = true;
        self.ticks(half)?;
        self.pins.strobe = false;
        self.ticks(half)
    }

    /// Writes the five nibbles of `inst` with write-enable held high, then
    /// waits `settle_cycles` ticks.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn write_instruction(&mut self, inst: &Instruction) -> Result<()> {
        debug!(instruction = %inst, "host write");
        self.pins.read_en = false;
        self.pins.write_en = true;
        for nibble in inst.to_nibbles() {
            self.write_nibble(nibble)?;
        }
        self.pins.write_en = false;
        self.ticks(self.timing.settle_cycles)
    }

    /// Clocks one nibble out of `miso`.
    ///
    /// `miso` is sampled as the strobe rises; the trailing tick lets the
    /// unit register the following falling edge.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn read_nibble(&mut self) -> Result<Nibble> {
        let half = self.timing.half_period;
        self.pins.strobe = false;
        self.ticks(half)?;
        self.pins.strobe = true;
        let sample = self.mau.outputs().miso;
        self.ticks(half)?;
        self.pins.strobe = false;
        self.tick()?;
        Ok(sample)
    }

    /// Clocks a whole result frame out with read-enable held high.
    ///
    /// # Errors
    ///
    /// Propagates [`Mau::tick`].
    pub fn read_frame(&mut self) -> Result<Readout> {
        self.pins.read_en = true;
        let mut frame = [Nibble::ZERO; RESULT_NIBBLES];
        for slot in &mut frame {
            *slot = self.read_nibble()?;
        }
        let out = self.mau.outputs();
        self.pins.read_en = false;
        Ok(Readout {
            frame,
            done: out.done,
            carry_out: out.carry_out,
        })
    }

    /// Reads and decodes one result.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::ReadoutIncomplete`] if the unit did not pulse
    /// `done` after the fifth nibble, or [`MauError::MalformedFrame`] if the
    /// frame's reserved bits are set.
    pub fn read_result(&mut self) -> Result<AluResult> {
        let readout = self.read_frame()?;
        if !readout.done {
            return Err(MauError::ReadoutIncomplete);
        }
        decode_result(readout.frame)
    }

    /// Writes `inst`, reads its result, then idles for `idle_gap` ticks.
    ///
    /// # Errors
    ///
    /// See [`read_result`](Self::read_result).
    pub fn transact(&mut self, inst: &Instruction) -> Result<AluResult> {
        self.write_instruction(inst)?;
        let result = self.read_result()?;
        self.ticks(self.timing.idle_gap)?;
        info!(instruction = %inst, %result, "transaction");
        Ok(result)
    }

    /// Runs [`transact`](Self::transact) over a sequence, stopping at the
    /// first error.
    ///
    /// # Errors
    ///
    /// See [`read_result`](Self::read_result).
    pub fn transact_all<'a>(
        &mut self,
        insts: impl IntoIterator<Item = &'a Instruction>,
    ) -> Result<Vec<AluResult>> {
        insts.into_iter().map(|inst| self.transact(inst)).collect()
    }
}
