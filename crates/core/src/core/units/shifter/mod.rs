//! Companion base-ISA shifter unit.
//!
//! A sibling of the bit-manipulation coprocessor with the same dual-strategy
//! design but only the three base shifts (`sll`, `srl`, `sra`) and no `rs2`
//! operand:
//! - [`serial`]: remaining-count engine, one bit per cycle, done one cycle
//!   after the count reaches zero.
//! - [`barrel`]: bit-reversal trick over a single right-shift mux network,
//!   fixed one-cycle latency.
//!
//! A trap arriving mid-operation aborts to idle and reports not-busy; unlike
//! the bit-manipulation controller, this unit asserts no completion pulse
//! for an aborted operation.

/// Combinational barrel shifter.
pub mod barrel;
/// Iterative bit-serial shifter.
pub mod serial;

use crate::config::{Config, Strategy};
use crate::core::signals::{ExecState, ShiftOp, UnitInput, UnitOutput};
use crate::core::units::ExecutionStrategy;
use crate::core::units::shifter::barrel::BarrelShifter;
use crate::core::units::shifter::serial::SerialShifter;
use crate::isa::decode::decode_shift;

/// Enum wrapper for static dispatch over the two shifter strategies.
#[derive(Debug)]
pub enum ShiftEngineWrapper {
    /// Iterative bit-serial shifter.
    Serial(SerialShifter),

    /// Combinational barrel shifter.
    Barrel(BarrelShifter),
}

impl ShiftEngineWrapper {
    /// Creates the engine selected by the build configuration.
    pub const fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Serial => Self::Serial(SerialShifter::new()),
            Strategy::Barrel => Self::Barrel(BarrelShifter::new()),
        }
    }
}

impl ExecutionStrategy<ShiftOp> for ShiftEngineWrapper {
    fn is_single_cycle(&self) -> bool {
        match self {
            Self::Serial(engine) => engine.is_single_cycle(),
            Self::Barrel(engine) => engine.is_single_cycle(),
        }
    }

    fn start(&mut self, op: ShiftOp, value: u32, amount: u8) {
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

/// Base-ISA shifter unit: controller, operand latch, and engine.
///
/// One [`ShiftUnit::tick`] call models one clock cycle. The dispatch bridge
/// state is not needed here: the serial engine's settle cycle provides the
/// timing margin the bit-manipulation controller gets from its bridge.
#[derive(Debug)]
pub struct ShiftUnit {
    /// Execution engine selected at construction.
    engine: ShiftEngineWrapper,
    /// Controller FSM state (`Dispatch` is unused by this unit).
    state: ExecState,
    /// Latched shift operand.
    value: u32,
    /// Latched shift amount.
    shamt: u8,
}

impl ShiftUnit {
    /// Creates an idle unit with the configured engine strategy.
    pub const fn new(config: &Config) -> Self {
        Self {
            engine: ShiftEngineWrapper::new(config.shifter.strategy),
            state: ExecState::Idle,
            value: 0,
            shamt: 0,
        }
    }

    /// Current controller state (exposed for harnesses and hazard checks).
    pub const fn state(&self) -> ExecState {
        self.state
    }

    /// Advances the unit by one clock cycle.
    ///
    /// Barrel builds assert `valid` on the start tick; serial builds go busy
    /// for `shamt + 1` ticks. A trap mid-operation aborts to idle without a
    /// `valid` pulse.
    pub fn tick(&mut self, input: &UnitInput) -> UnitOutput {
        if input.start {
            self.value = input.rs1;
            self.shamt = input.shamt;
        }

        match self.state {
            ExecState::Idle | ExecState::Dispatch => self.tick_idle(input),
            ExecState::Busy => self.tick_busy(input),
        }
    }

    /// Idle-state cycle: accept a start pulse, or do nothing.
    fn tick_idle(&mut self, input: &UnitInput) -> UnitOutput {
        if !input.start {
            return UnitOutput::default();
        }
        let op = match decode_shift(input.class, input.funct3, input.funct12) {
            Ok(op) => op,
            Err(err) => {
                tracing::warn!(%err, "start pulse ignored");
                return UnitOutput::default();
            }
        };
        self.engine.start(op, self.value, self.shamt);

        if self.engine.is_single_cycle() {
            let result = self.engine.step().unwrap_or_default();
            tracing::trace!(?op, result, "single-cycle shift");
            return UnitOutput {
                result,
                valid: true,
            };
        }
        self.state = ExecState::Busy;
        tracing::trace!(?op, shamt = self.shamt, "serial shift started");
        UnitOutput::default()
    }

    /// Busy-state cycle: trap abort or engine step.
    fn tick_busy(&mut self, input: &UnitInput) -> UnitOutput {
        if input.trap {
            self.engine.cancel();
            self.state = ExecState::Idle;
            tracing::trace!("trap abort");
            return UnitOutput::default();
        }
        match self.engine.step() {
            Some(result) => {
                self.state = ExecState::Idle;
                tracing::trace!(result, "serial shift completion");
                UnitOutput {
                    result,
                    valid: true,
                }
            }
            None => UnitOutput::default(),
        }
    }
}
