//! Iterative bit-serial engine (area-optimized strategy).
//!
//! Operates one bit per cycle on a working shift register:
//! - Rotate: one single-bit rotation per cycle for exactly `shamt` cycles.
//! - Zero scans: one shift per cycle toward the tested bit, injecting a
//!   constant 1 into the vacated position; stops the cycle the tested bit
//!   reads 1, so an all-zero word stops after exactly `WORD_WIDTH`
//!   iterations on the first injected bit.
//! - Population count: exactly `WORD_WIDTH` shifts, tallying the bit shifted
//!   out each cycle.
//!
//! Latency is operand-dependent for the scans and fixed for rotate
//! (`shamt` cycles, zero legal) and popcount (`WORD_WIDTH` cycles).

use crate::common::constants::{LSB_MASK, MSB_MASK, SHAMT_MASK, WORD_WIDTH};
use crate::core::units::ExecutionStrategy;
use crate::core::units::bitmanip::engine::EngineOp;

/// Working set of the serial engine.
///
/// The iteration counter and tally are sized to hold `WORD_WIDTH` inclusive,
/// so a zero-count over an all-zero word never overflows.
#[derive(Debug, Default)]
pub struct SerialEngine {
    /// Latched operation.
    op: EngineOp,
    /// Working shift register.
    sreg: u32,
    /// Iterations performed so far.
    iter: u8,
    /// Target iteration count (rotate amount or `WORD_WIDTH`; scans run
    /// until the tested bit stops them).
    target: u8,
    /// Set-bit tally (population count only).
    tally: u8,
    /// Running flag; cleared on completion or cancellation.
    running: bool,
}

impl SerialEngine {
    /// Creates an idle engine.
    pub const fn new() -> Self {
        Self {
            op: EngineOp::RotateLeft,
            sreg: 0,
            iter: 0,
            target: 0,
            tally: 0,
            running: false,
        }
    }
}

impl ExecutionStrategy<EngineOp> for SerialEngine {
    fn is_single_cycle(&self) -> bool {
        false
    }

    fn start(&mut self, op: EngineOp, value: u32, amount: u8) {
        self.op = op;
        self.sreg = value;
        self.iter = 0;
        self.tally = 0;
        self.target = match op {
            EngineOp::RotateLeft | EngineOp::RotateRight => amount & SHAMT_MASK,
            // Scans stop on the tested bit; the target is only the popcount
            // bound, but sizing it to the word width keeps every mode bounded.
            EngineOp::CountLeading | EngineOp::CountTrailing | EngineOp::PopCount => {
                WORD_WIDTH as u8
            }
        };
        self.running = true;
    }

    fn step(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        match self.op {
            EngineOp::RotateLeft | EngineOp::RotateRight => self.step_rotate(),
            EngineOp::CountLeading | EngineOp::CountTrailing => self.step_scan(),
            EngineOp::PopCount => self.step_popcount(),
        }
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl SerialEngine {
    /// One single-bit rotation per step; done after exactly `target` steps.
    ///
    /// A zero amount completes on the first step without touching the
    /// working register.
    fn step_rotate(&mut self) -> Option<u32> {
        if self.iter == self.target {
            return self.finish(self.sreg);
        }
        self.sreg = match self.op {
            EngineOp::RotateLeft => (self.sreg << 1) | (self.sreg >> (WORD_WIDTH - 1)),
            _ => (self.sreg >> 1) | (self.sreg << (WORD_WIDTH - 1)),
        };
        self.iter += 1;
        if self.iter == self.target {
            self.finish(self.sreg)
        } else {
            None
        }
    }

    /// One shift toward the tested bit per step; stops when it reads 1.
    fn step_scan(&mut self) -> Option<u32> {
        let hit = match self.op {
            EngineOp::CountLeading => self.sreg & MSB_MASK != 0,
            _ => self.sreg & LSB_MASK != 0,
        };
        if hit {
            return self.finish(u32::from(self.iter));
        }
        self.sreg = match self.op {
            // Inject a constant 1 into the vacated position so an all-zero
            // word terminates the scan at exactly WORD_WIDTH iterations.
            EngineOp::CountLeading => (self.sreg << 1) | LSB_MASK,
            _ => (self.sreg >> 1) | MSB_MASK,
        };
        self.iter += 1;
        None
    }

    /// One shift per step for exactly `WORD_WIDTH` steps, tallying set bits.
    fn step_popcount(&mut self) -> Option<u32> {
        self.tally += (self.sreg & LSB_MASK) as u8;
        self.sreg >>= 1;
        self.iter += 1;
        if self.iter == self.target {
            self.finish(u32::from(self.tally))
        } else {
            None
        }
    }

    /// Clears the running flag and reports the final value.
    fn finish(&mut self, result: u32) -> Option<u32> {
        self.running = false;
        Some(result)
    }
}
