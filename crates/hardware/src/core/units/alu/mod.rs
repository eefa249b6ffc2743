//! Configurable two-lane datapath.
//!
//! This module implements the combinational core used by the ALU stage.
//! Each lane runs pre-adder → selector → multiplier under its own switches,
//! then the post-combine merges the two lanes. Nothing here holds state;
//! sequencing and the result handshake live in the execute stage.
//!
//! - [`lane`]:    pre-adder, multiplicand selector, multiply-or-concat
//! - [`combine`]: 11-bit add/subtract or lane packing

/// Post-combine add/subtract/pack.
pub mod combine;

/// Per-lane pre-adder, selector and multiplier.
pub mod lane;

use self::lane::LaneOperands;
use crate::core::pipeline::signals::{AluResult, Command};

/// Stateless datapath evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Datapath;

impl Datapath {
    /// Evaluates `cmd` against its control word.
    ///
    /// The x lane sees `(x0, x1)` with `y1` as its cross operand; the y lane
    /// sees `(y0, y1)` with `x1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mau_core::core::pipeline::signals::Command;
    /// use mau_core::core::units::alu::Datapath;
    /// use mau_core::isa::{Instruction, Opcode};
    ///
    /// // DOT2: 3*4 + 5*6
    /// let cmd = Command::route(&Instruction::new(Opcode::Dot2, 3, 4, 5, 6));
    /// let res = Datapath::execute(&cmd);
    /// assert_eq!(res.value, 42);
    /// assert!(!res.carry);
    ///
    /// // VADD2 packs the lane sums: {1+2, 3+4}
    /// let cmd = Command::route(&Instruction::new(Opcode::Vadd2, 1, 2, 3, 4));
    /// assert_eq!(Datapath::execute(&cmd).value, 0x67);
    /// ```
    pub const fn execute(cmd: &Command) -> AluResult {
        let (x0, x1) = (cmd.x0.wide(), cmd.x1.wide());
        let (y0, y1) = (cmd.y0.wide(), cmd.y1.wide());

        let x = lane::evaluate(
            LaneOperands {
                in0: x0,
                in1: x1,
                cross: y1,
            },
            cmd.ctrl.lane_x(),
        );
        let y = lane::evaluate(
            LaneOperands {
                in0: y0,
                in1: y1,
                cross: x1,
            },
            cmd.ctrl.lane_y(),
        );
        combine::combine(x, y, cmd.ctrl.post_en, cmd.ctrl.post_sub)
    }
}
