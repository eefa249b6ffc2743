//! Single-stage drivers.
//!
//! Each bench owns one stage and an input bundle, and toggles the strobe at
//! five ticks per phase.

use mau_core::common::constants::RESULT_NIBBLES;
use mau_core::common::Nibble;
use mau_core::core::pipeline::signals::{AluResult, RxInputs, TxInputs};
use mau_core::core::pipeline::stages::{FrameReceiver, FrameTransmitter};
use mau_core::core::PipelineStage;

/// Ticks per strobe phase.
pub const HALF_PERIOD: u32 = 5;

// ─── RX ──────────────────────────────────────────────────────────────────────

pub struct RxBench {
    pub rx: FrameReceiver,
    pub inputs: RxInputs,
    /// Valid pulses seen since construction.
    pub pulses: usize,
}

impl Default for RxBench {
    fn default() -> Self {
        Self::new()
    }
}

impl RxBench {
    /// A reset receiver with the decoder ready.
    pub fn new() -> Self {
        Self {
            rx: FrameReceiver::new(),
            inputs: RxInputs {
                downstream_ready: true,
                ..RxInputs::default()
            },
            pulses: 0,
        }
    }

    pub fn tick(&mut self) {
        self.rx.tick(&self.inputs).unwrap();
        self.pulses += usize::from(self.rx.valid());
    }

    pub fn ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Low, high, low strobe cycle with `value` on the data line.
    pub fn write_nibble(&mut self, value: u8) {
        self.inputs.data = Nibble::truncate(value);
        self.inputs.strobe = false;
        self.ticks(HALF_PERIOD);
        self.inputs.strobe = true;
        self.ticks(HALF_PERIOD);
        self.inputs.strobe = false;
        self.ticks(HALF_PERIOD);
    }

    /// Write-enable high, all nibbles, write-enable low, two idle ticks.
    pub fn write_all(&mut self, nibbles: &[u8]) {
        self.inputs.write_en = true;
        for &n in nibbles {
            self.write_nibble(n);
        }
        self.inputs.write_en = false;
        self.ticks(2);
    }

    pub fn fields(&self) -> [u8; 5] {
        self.rx.instruction().to_nibbles().map(Nibble::val)
    }

    pub fn reset(&mut self) {
        self.rx.reset();
        self.inputs = RxInputs {
            downstream_ready: true,
            ..RxInputs::default()
        };
    }
}

// ─── TX ──────────────────────────────────────────────────────────────────────

pub struct TxBench {
    pub tx: FrameTransmitter,
    pub inputs: TxInputs,
}

impl Default for TxBench {
    fn default() -> Self {
        Self::new()
    }
}

impl TxBench {
    pub fn new() -> Self {
        Self {
            tx: FrameTransmitter::new(),
            inputs: TxInputs::default(),
        }
    }

    pub fn tick(&mut self) {
        self.tx.tick(&self.inputs).unwrap();
    }

    pub fn ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Offers `result` for one tick once the transmitter can capture it.
    pub fn send_result(&mut self, value: u16, carry: bool) {
        self.inputs.result = AluResult::new(value, carry);
        while !self.tx.capture_ready() {
            self.tick();
        }
        self.inputs.res_valid = true;
        self.tick();
        self.inputs.res_valid = false;
    }

    /// Clocks one nibble out; `miso` is sampled as the strobe rises.
    pub fn read_nibble(&mut self) -> u8 {
        self.inputs.strobe = false;
        self.ticks(HALF_PERIOD);
        self.inputs.strobe = true;
        let sample = self.tx.miso().val();
        self.ticks(HALF_PERIOD);
        self.inputs.strobe = false;
        self.tick();
        sample
    }

    pub fn read_frame(&mut self) -> [u8; RESULT_NIBBLES] {
        let mut frame = [0; RESULT_NIBBLES];
        for slot in &mut frame {
            *slot = self.read_nibble();
        }
        frame
    }

    pub fn reset(&mut self) {
        self.tx.reset();
        self.inputs = TxInputs::default();
    }
}
