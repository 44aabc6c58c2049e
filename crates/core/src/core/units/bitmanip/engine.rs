//! Engine operation set and strategy dispatch for the bit-manipulation unit.
//!
//! Only the operations with a genuinely iterative hardware form go through
//! the engine; everything else settles in the combinational helpers. The
//! wrapper enum provides static dispatch over the two strategies without
//! ever instantiating both in one unit.

use crate::config::Strategy;
use crate::core::signals::{BitScan, BitmanipOp, RotDir};
use crate::core::units::ExecutionStrategy;
use crate::core::units::bitmanip::barrel::BarrelEngine;
use crate::core::units::bitmanip::serial::SerialEngine;

/// Operations executed by the shift/count engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineOp {
    /// Rotate left by the latched amount.
    #[default]
    RotateLeft,

    /// Rotate right by the latched amount.
    RotateRight,

    /// Count leading zeros.
    CountLeading,

    /// Count trailing zeros.
    CountTrailing,

    /// Population count.
    PopCount,
}

impl EngineOp {
    /// Maps a decoded iterative operation onto the engine operation set.
    ///
    /// Returns `None` for operations the engine does not execute.
    pub const fn from_op(op: BitmanipOp) -> Option<Self> {
        match op {
            BitmanipOp::Rotate(RotDir::Left) => Some(Self::RotateLeft),
            BitmanipOp::Rotate(RotDir::Right) => Some(Self::RotateRight),
            BitmanipOp::CountZeros(BitScan::Leading) => Some(Self::CountLeading),
            BitmanipOp::CountZeros(BitScan::Trailing) => Some(Self::CountTrailing),
            BitmanipOp::Cpop => Some(Self::PopCount),
            _ => None,
        }
    }
}

/// Enum wrapper for static dispatch over the two engine strategies.
///
/// This avoids vtable lookups in the per-cycle tick path.
#[derive(Debug)]
pub enum EngineWrapper {
    /// Iterative bit-serial engine.
    Serial(SerialEngine),

    /// Combinational barrel engine.
    Barrel(BarrelEngine),
}

impl EngineWrapper {
    /// Creates the engine selected by the build configuration.
    pub const fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Serial => Self::Serial(SerialEngine::new()),
            Strategy::Barrel => Self::Barrel(BarrelEngine::new()),
        }
    }
}

impl ExecutionStrategy<EngineOp> for EngineWrapper {
    fn is_single_cycle(&self) -> bool {
        match self {
            Self::Serial(engine) => engine.is_single_cycle(),
            Self::Barrel(engine) => engine.is_single_cycle(),
        }
    }

    fn start(&mut self, op: EngineOp, value: u32, amount: u8) {
        match self {
            Self::Serial(engine) => engine.start(op, value, amount),
            Self::Barrel(engine) => engine.start(op, value, amount),
        }
    }

    fn step(&mut self) -> Option<u32> {
        match self {
            Self::Serial(engine) => engine.step(),
            Self::Barrel(engine) => engine.step(),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Serial(engine) => engine.cancel(),
            Self::Barrel(engine) => engine.cancel(),
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Self::Serial(engine) => engine.is_running(),
            Self::Barrel(engine) => engine.is_running(),
        }
    }
}
