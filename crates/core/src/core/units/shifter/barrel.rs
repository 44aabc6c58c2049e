//! Combinational barrel shifter (latency-optimized strategy).
//!
//! Left shifts are converted into right shifts by bit-reversing the input,
//! applying the same staged right-shift mux network used for rotation, and
//! reversing the registered result again. Only one shift direction needs a
//! mux network that way. Arithmetic right shifts replicate the sign bit into
//! every vacated position per stage. Fixed one-cycle latency.

use crate::common::constants::{SHAMT_BITS, SHAMT_MASK};
use crate::core::signals::ShiftOp;
use crate::core::units::ExecutionStrategy;

/// Barrel shifter state: the registered result of the current operation.
#[derive(Debug, Default)]
pub struct BarrelShifter {
    /// Value waiting in the output register stage.
    result: u32,
    /// A started operation has not been consumed by `step` yet.
    pending: bool,
}

impl BarrelShifter {
    /// Creates an idle shifter.
    pub const fn new() -> Self {
        Self {
            result: 0,
            pending: false,
        }
    }

    /// Evaluates a shift combinationally.
    ///
    /// Exposed for equivalence testing against the serial shifter.
    pub const fn evaluate(op: ShiftOp, value: u32, amount: u8) -> u32 {
        let amount = (amount & SHAMT_MASK) as u32;
        match op {
            ShiftOp::Sll => {
                right_shift_network(value.reverse_bits(), amount, false).reverse_bits()
            }
            ShiftOp::Srl => right_shift_network(value, amount, false),
            ShiftOp::Sra => right_shift_network(value, amount, true),
        }
    }
}

/// Right-shift mux network: one conditional stage per shift-amount bit.
const fn right_shift_network(value: u32, amount: u32, arithmetic: bool) -> u32 {
    let mut word = value;
    let mut stage = 0;
    while stage < SHAMT_BITS {
        if (amount >> stage) & 1 == 1 {
            let distance = 1 << stage;
            word = if arithmetic {
                ((word as i32) >> distance) as u32
            } else {
                word >> distance
            };
        }
        stage += 1;
    }
    word
}

impl ExecutionStrategy<ShiftOp> for BarrelShifter {
    fn is_single_cycle(&self) -> bool {
        true
    }

    fn start(&mut self, op: ShiftOp, value: u32, amount: u8) {
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
