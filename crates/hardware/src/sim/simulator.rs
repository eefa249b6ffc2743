//! Top-level MAU: the four stages wired behind a pin interface.
//!
//! Each tick gathers every stage's outputs from committed state, builds all
//! stage inputs from them and the pins, and only then ticks the stages. The
//! order the stages are ticked in is therefore irrelevant.

use tracing::{debug, trace};

use crate::common::{Nibble, Result};
use crate::config::Config;
use crate::core::pipeline::signals::{AluInputs, DecodeInputs, RxInputs, TxInputs};
use crate::core::pipeline::stages::{AluCore, FrameReceiver, FrameTransmitter, OpcodeDecoder};
use crate::core::pipeline::traits::PipelineStage;
use crate::stats::MauStats;

/// Pin-level inputs sampled on a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinInputs {
    /// Synchronous reset, active high.
    pub reset: bool,
    /// Shared serial strobe.
    pub strobe: bool,
    /// Serial write enable.
    pub write_en: bool,
    /// Serial read enable.
    pub read_en: bool,
    /// Serial data in.
    pub mosi: Nibble,
}

/// Pin-level outputs, valid between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinOutputs {
    /// Serial data out.
    pub miso: Nibble,
    /// Transmission-done pulse.
    pub done: bool,
    /// Carry of the most recent ALU result.
    pub carry_out: bool,
}

/// The Math Accelerator Unit.
#[derive(Clone, Debug)]
pub struct Mau {
    rx: FrameReceiver,
    decode: OpcodeDecoder,
    alu: AluCore,
    tx: FrameTransmitter,
    stats: MauStats,
    trace: bool,
}

impl Default for Mau {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Mau {
    /// Creates a unit in its reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            rx: FrameReceiver::new(),
            decode: OpcodeDecoder::new(),
            alu: AluCore::new(),
            tx: FrameTransmitter::new(),
            stats: MauStats::default(),
            trace: config.trace.enabled || cfg!(feature = "always-trace"),
        }
    }

    /// Advances the unit by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates a stage error. The wiring only loads a pipeline register
    /// when its occupant leaves on the same tick, so this does not happen in
    /// practice.
    pub fn tick(&mut self, pins: &PinInputs) -> Result<()> {
        self.stats.cycles += 1;
        if self.trace {
            trace!(cycle = self.stats.cycles, ?pins, "tick");
        }

        if pins.reset {
            self.stats.resets += 1;
            self.reset_stages();
            return Ok(());
        }

        let cmd_ready = self.alu.cmd_ready();
        let capture_ready = self.tx.capture_ready();

        let rx_in = RxInputs {
            strobe: pins.strobe,
            write_en: pins.write_en,
            data: pins.mosi,
            downstream_ready: OpcodeDecoder::ready_out(cmd_ready),
        };
        let decode_in = DecodeInputs {
            instruction: self.rx.instruction(),
            valid: self.rx.valid(),
            downstream_ready: cmd_ready,
        };
        let alu_in = AluInputs {
            cmd_valid: self.decode.valid(),
            command: *self.decode.command(),
            res_ready: capture_ready,
        };
        let tx_in = TxInputs {
            res_valid: self.alu.res_valid(),
            result: self.alu.result(),
            strobe: pins.strobe,
            read_en: pins.read_en,
        };

        self.record_handshakes(&decode_in, &alu_in, &tx_in);

        self.rx.tick(&rx_in)?;
        self.decode.tick(&decode_in)?;
        self.alu.tick(&alu_in)?;
        self.tx.tick(&tx_in)?;

        self.stats.nibbles_written += u64::from(self.rx.captured());
        self.stats.instructions_suppressed += u64::from(self.rx.suppressed());
        self.stats.frames_transmitted += u64::from(self.tx.done());
        Ok(())
    }

    fn record_handshakes(&mut self, decode_in: &DecodeInputs, alu_in: &AluInputs, tx_in: &TxInputs) {
        if decode_in.valid {
            if decode_in.downstream_ready {
                self.stats.instructions_received += 1;
            } else {
                debug!(instruction = %decode_in.instruction, "rx pulse lost: alu became busy");
                self.stats.instructions_suppressed += 1;
            }
        }
        if alu_in.cmd_valid && decode_in.downstream_ready {
            self.stats.commands_issued += 1;
        }
        if tx_in.res_valid {
            self.stats.alu_hold_cycles += 1;
            if alu_in.res_ready {
                self.stats.results_captured += 1;
            }
        }
    }

    /// Pin outputs from committed state.
    pub const fn outputs(&self) -> PinOutputs {
        PinOutputs {
            miso: self.tx.miso(),
            done: self.tx.done(),
            carry_out: FrameTransmitter::carry_out(self.alu.result().carry),
        }
    }

    /// Clears every stage, as one tick with the reset line high would.
    ///
    /// Statistics are kept.
    pub fn reset(&mut self) {
        self.stats.resets += 1;
        self.reset_stages();
    }

    fn reset_stages(&mut self) {
        self.rx.reset();
        self.decode.reset();
        self.alu.reset();
        self.tx.reset();
    }

    /// Receiver stage.
    pub const fn rx(&self) -> &FrameReceiver {
        &self.rx
    }

    /// Decoder stage.
    pub const fn decode(&self) -> &OpcodeDecoder {
        &self.decode
    }

    /// ALU stage.
    pub const fn alu(&self) -> &AluCore {
        &self.alu
    }

    /// Transmitter stage.
    pub const fn tx(&self) -> &FrameTransmitter {
        &self.tx
    }

    /// Counters accumulated since construction.
    pub const fn stats(&self) -> &MauStats {
        &self.stats
    }
}
