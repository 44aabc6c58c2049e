//! Bit-manipulation coprocessor (Zba / Zbb / Zbs).
//!
//! This module implements the unit that executes the B-extension operations.
//! It is organized as the hardware is:
//! - [`engine`]:  engine operation set and strategy dispatch wrapper.
//! - [`serial`]:  iterative bit-serial engine (area-optimized).
//! - [`barrel`]:  combinational barrel engine (latency-optimized).
//! - [`helpers`]: single-cycle combinational networks.
//!
//! The controller here sequences start → (optional multi-cycle wait) →
//! valid, latches operands on every start pulse, aborts on trap, and gates
//! exactly one operation's result to the output per completed instruction.

/// Combinational barrel engine.
pub mod barrel;
/// Engine operation set and strategy dispatch.
pub mod engine;
/// Combinational arithmetic helpers.
pub mod helpers;
/// Iterative bit-serial engine.
pub mod serial;

use crate::config::Config;
use crate::core::signals::{BitmanipOp, CmpFlags, ExecState, OperandLatch, UnitInput, UnitOutput};
use crate::core::units::ExecutionStrategy;
use crate::core::units::bitmanip::engine::{EngineOp, EngineWrapper};
use crate::isa::decode::decode;

/// Bit-manipulation coprocessor: controller FSM, operand latch, execution
/// engine, and output gate.
///
/// One [`BitmanipUnit::tick`] call models one clock cycle. The unit is not
/// reentrant: a second start pulse while busy re-fires the operand latch but
/// the in-flight operation keeps the state machine (preventing that overlap
/// is the external hazard logic's obligation).
#[derive(Debug)]
pub struct BitmanipUnit {
    /// Execution engine selected at construction.
    engine: EngineWrapper,
    /// Controller FSM state.
    state: ExecState,
    /// Operand latch, captured on every start pulse.
    latch: OperandLatch,
    /// Latched decoded operation selector.
    op: BitmanipOp,
}

impl BitmanipUnit {
    /// Creates an idle unit with the configured engine strategy.
    pub const fn new(config: &Config) -> Self {
        Self {
            engine: EngineWrapper::new(config.bitmanip.strategy),
            state: ExecState::Idle,
            latch: OperandLatch {
                rs1: 0,
                rs2: 0,
                shamt: 0,
                cmp: CmpFlags {
                    equal: false,
                    less: false,
                },
            },
            op: BitmanipOp::Andn,
        }
    }

    /// Current controller state (exposed for harnesses and hazard checks).
    pub const fn state(&self) -> ExecState {
        self.state
    }

    /// Advances the unit by one clock cycle.
    ///
    /// `valid` is asserted for exactly one tick per accepted operation:
    /// on the start tick for single-cycle paths, or on the completion (or
    /// trap-abort) tick of a multi-cycle operation. `result` reads zero on
    /// every tick where `valid` is low, and on trap aborts — the partial
    /// result is discarded, never substituted.
    pub fn tick(&mut self, input: &UnitInput) -> UnitOutput {
        // The operand latch fires on every start pulse regardless of state.
        if input.start {
            self.latch = OperandLatch::capture(input);
        }

        match self.state {
            ExecState::Idle => self.tick_idle(input),
            ExecState::Dispatch => {
                self.state = ExecState::Busy;
                UnitOutput::default()
            }
            ExecState::Busy => self.tick_busy(input),
        }
    }

    /// Idle-state cycle: accept a start pulse, or do nothing.
    fn tick_idle(&mut self, input: &UnitInput) -> UnitOutput {
        if !input.start {
            return UnitOutput::default();
        }
        let op = match decode(input.class, input.funct3, input.funct12) {
            Ok(op) => op,
            Err(err) => {
                // Defined fail-fast behavior: an undecodable start pulse is
                // ignored and the unit stays idle.
                tracing::warn!(%err, "start pulse ignored");
                return UnitOutput::default();
            }
        };
        self.op = op;

        if op.is_iterative() && !self.engine.is_single_cycle() {
            self.start_engine(op);
            self.state = ExecState::Dispatch;
            tracing::trace!(?op, "dispatching multi-cycle operation");
            return UnitOutput::default();
        }

        // Single-cycle path: iterative ops go through the barrel engine,
        // everything else settles in the combinational helpers.
        let engine_result = if op.is_iterative() {
            self.start_engine(op);
            self.engine.step().unwrap_or_default()
        } else {
            0
        };
        let result = self.output_gate(engine_result);
        tracing::trace!(?op, result, "single-cycle completion");
        UnitOutput {
            result,
            valid: true,
        }
    }

    /// Busy-state cycle: trap abort or engine step.
    fn tick_busy(&mut self, input: &UnitInput) -> UnitOutput {
        if input.trap {
            self.engine.cancel();
            self.state = ExecState::Idle;
            tracing::trace!(op = ?self.op, "trap abort");
            // The handshake completes but the result register is not loaded.
            return UnitOutput {
                result: 0,
                valid: true,
            };
        }
        match self.engine.step() {
            Some(engine_result) => {
                self.state = ExecState::Idle;
                let result = self.output_gate(engine_result);
                tracing::trace!(op = ?self.op, result, "multi-cycle completion");
                UnitOutput {
                    result,
                    valid: true,
                }
            }
            None => UnitOutput::default(),
        }
    }

    /// Pulses the engine's internal start with the latched operands.
    fn start_engine(&mut self, op: BitmanipOp) {
        if let Some(engine_op) = EngineOp::from_op(op) {
            self.engine
                .start(engine_op, self.latch.rs1, self.latch.shamt);
        }
    }

    /// Output gate: selects exactly one operation's result.
    ///
    /// The hardware masks every per-operation result by its one-hot selector
    /// bit and ORs the lanes; with an enumeration the same exclusivity is an
    /// exhaustive match over the latched selector.
    fn output_gate(&self, engine_result: u32) -> u32 {
        let latch = &self.latch;
        match self.op {
            BitmanipOp::Andn => helpers::andn(latch.rs1, latch.rs2),
            BitmanipOp::Orn => helpers::orn(latch.rs1, latch.rs2),
            BitmanipOp::Xnor => helpers::xnor(latch.rs1, latch.rs2),
            BitmanipOp::CountZeros(_) | BitmanipOp::Cpop | BitmanipOp::Rotate(_) => engine_result,
            BitmanipOp::MinMax { max, .. } => {
                helpers::min_max_select(latch.rs1, latch.rs2, latch.cmp.less, max)
            }
            BitmanipOp::SignExtend(width) => helpers::sign_extend(latch.rs1, width),
            BitmanipOp::ZextH => helpers::zext_h(latch.rs1),
            BitmanipOp::Orcb => helpers::orc_b(latch.rs1),
            BitmanipOp::Rev8 => helpers::rev8(latch.rs1),
            BitmanipOp::ShiftAdd { shift } => helpers::shift_add(latch.rs1, latch.rs2, shift),
            BitmanipOp::Bclr => helpers::bclr(latch.rs1, latch.shamt),
            BitmanipOp::Bext => helpers::bext(latch.rs1, latch.shamt),
            BitmanipOp::Binv => helpers::binv(latch.rs1, latch.shamt),
            BitmanipOp::Bset => helpers::bset(latch.rs1, latch.shamt),
        }
    }
}
