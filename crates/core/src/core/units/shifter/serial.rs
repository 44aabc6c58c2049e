//! Iterative bit-serial shifter (area-optimized strategy).
//!
//! A remaining-count register is decremented once per cycle while the
//! working register shifts one bit per cycle; the vacated high bit is
//! sign-extended only for arithmetic right shifts. Done is detected when the
//! remaining count reaches zero, with a one-cycle pipeline delay before the
//! result is declared valid so the final shifted value is stable.

use crate::common::constants::SHAMT_MASK;
use crate::core::signals::ShiftOp;
use crate::core::units::ExecutionStrategy;

/// Working set of the serial shifter.
#[derive(Debug, Default)]
pub struct SerialShifter {
    /// Latched operation.
    op: ShiftOp,
    /// Working shift register.
    sreg: u32,
    /// Remaining single-bit shifts.
    remaining: u8,
    /// Running flag; cleared on completion or cancellation.
    running: bool,
}

impl SerialShifter {
    /// Creates an idle shifter.
    pub const fn new() -> Self {
        Self {
            op: ShiftOp::Sll,
            sreg: 0,
            remaining: 0,
            running: false,
        }
    }

    /// One single-bit shift of the working register.
    const fn shift_once(op: ShiftOp, word: u32) -> u32 {
        match op {
            ShiftOp::Sll => word << 1,
            ShiftOp::Srl => word >> 1,
            ShiftOp::Sra => ((word as i32) >> 1) as u32,
        }
    }
}

impl ExecutionStrategy<ShiftOp> for SerialShifter {
    fn is_single_cycle(&self) -> bool {
        false
    }

    fn start(&mut self, op: ShiftOp, value: u32, amount: u8) {
        self.op = op;
        self.sreg = value;
        self.remaining = amount & SHAMT_MASK;
        self.running = true;
    }

    fn step(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            self.sreg = Self::shift_once(self.op, self.sreg);
            // The settle cycle after the count reaches zero reports done.
            return None;
        }
        self.running = false;
        Some(self.sreg)
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
