//! Combinational barrel engine (latency-optimized strategy).
//!
//! Rotation is a fixed-depth network of `log2(WORD_WIDTH)` conditional mux
//! stages, one per shift-amount bit, rotating right only; left rotation is
//! mapped onto it as a right rotation by `WORD_WIDTH - amount`. The counting
//! operations use closed-form bit-counting. Everything settles within the
//! cycle and passes through one register stage, so the latency is a fixed
//! single cycle regardless of operand values.

use crate::common::constants::{SHAMT_BITS, SHAMT_MASK, WORD_WIDTH};
use crate::core::units::ExecutionStrategy;
use crate::core::units::bitmanip::engine::EngineOp;

/// Barrel engine state: the registered result of the current operation.
#[derive(Debug, Default)]
pub struct BarrelEngine {
    /// Value waiting in the output register stage.
    result: u32,
    /// A started operation has not been consumed by `step` yet.
    pending: bool,
}

impl BarrelEngine {
    /// Creates an idle engine.
    pub const fn new() -> Self {
        Self {
            result: 0,
            pending: false,
        }
    }

    /// Evaluates an operation combinationally.
    ///
    /// Exposed for equivalence testing against the serial engine; the cycle
    /// contract is only visible through the [`ExecutionStrategy`] interface.
    pub const fn evaluate(op: EngineOp, value: u32, amount: u8) -> u32 {
        let amount = (amount & SHAMT_MASK) as u32;
        match op {
            // One rotation direction suffices: a left rotate is a right
            // rotate by the two's-complement of the amount, modulo the width.
            EngineOp::RotateLeft => rotate_right_network(value, (WORD_WIDTH - amount) & 0x1F),
            EngineOp::RotateRight => rotate_right_network(value, amount),
            EngineOp::CountLeading => value.leading_zeros(),
            EngineOp::CountTrailing => value.trailing_zeros(),
            EngineOp::PopCount => value.count_ones(),
        }
    }
}

/// Rotate-right mux network: one conditional stage per shift-amount bit.
const fn rotate_right_network(value: u32, amount: u32) -> u32 {
    let mut word = value;
    let mut stage = 0;
    while stage < SHAMT_BITS {
        if (amount >> stage) & 1 == 1 {
            let distance = 1 << stage;
            word = (word >> distance) | (word << (WORD_WIDTH - distance));
        }
        stage += 1;
    }
    word
}

impl ExecutionStrategy<EngineOp> for BarrelEngine {
    fn is_single_cycle(&self) -> bool {
        true
    }

    fn start(&mut self, op: EngineOp, value: u32, amount: u8) {
        self.result = Self::evaluate(op, value, amount);
        self.pending = true;
    }

    fn step(&mut self) -> Option<u32> {
        if self.pending {
            self.pending = false;
            Some(self.result)
        } else {
            None
        }
    }

    fn cancel(&mut self) {
        self.pending = false;
    }

    fn is_running(&self) -> bool {
        self.pending
    }
}
