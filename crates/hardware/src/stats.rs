//! Run statistics.
//!
//! This module tracks handshake activity for the MAU. It provides:
//! 1. **Time:** Ticks elapsed and resets applied.
//! 2. **Traffic:** Counts at every stage boundary, RX through TX.
//! 3. **Backpressure:** Suppressed instructions and ALU hold cycles.

use std::fmt;

use serde::Serialize;

/// Counters updated by `Mau::tick` from the signals of each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MauStats {
    /// Ticks elapsed, including ticks spent in reset.
    pub cycles: u64,
    /// Ticks on which the reset line was asserted.
    pub resets: u64,
    /// Nibbles latched by RX.
    pub nibbles_written: u64,
    /// Complete instructions handed to DECODE.
    pub instructions_received: u64,
    /// Complete instructions dropped because DECODE was not ready.
    pub instructions_suppressed: u64,
    /// Commands accepted by the ALU.
    pub commands_issued: u64,
    /// Ticks the ALU spent holding a result.
    pub alu_hold_cycles: u64,
    /// Results captured into the TX holding register.
    pub results_captured: u64,
    /// Result frames fully shifted out.
    pub frames_transmitted: u64,
}

impl MauStats {
    /// Fraction of ticks the ALU was holding a result.
    pub const fn alu_occupancy(&self) -> f64 {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        self.alu_hold_cycles as f64 / cyc as f64
    }

    /// Average ticks per transmitted frame, or `None` before the first one.
    pub fn cycles_per_frame(&self) -> Option<f64> {
        (self.frames_transmitted > 0).then(|| self.cycles as f64 / self.frames_transmitted as f64)
    }
}

impl fmt::Display for MauStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "MAU SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_resets               {}", self.resets)?;
        match self.cycles_per_frame() {
            Some(cpf) => writeln!(f, "cycles_per_frame         {cpf:.2}")?,
            None => writeln!(f, "cycles_per_frame         -")?,
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HANDSHAKES")?;
        writeln!(f, "  rx.nibbles             {}", self.nibbles_written)?;
        writeln!(f, "  rx.instructions        {}", self.instructions_received)?;
        writeln!(f, "  rx.suppressed          {}", self.instructions_suppressed)?;
        writeln!(f, "  alu.commands           {}", self.commands_issued)?;
        writeln!(
            f,
            "  alu.hold_cycles        {} ({:.2}%)",
            self.alu_hold_cycles,
            self.alu_occupancy() * 100.0
        )?;
        writeln!(f, "  tx.captured            {}", self.results_captured)?;
        write!(f, "  tx.frames              {}", self.frames_transmitted)
    }
}
