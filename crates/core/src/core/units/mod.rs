//! Functional units of the execution core.
//!
//! Two sibling units share one dual-strategy design: a bit-manipulation
//! coprocessor (Zba/Zbb/Zbs) and a companion base-ISA shifter. Each unit owns
//! exactly one execution engine, selected at construction from the build
//! configuration — the software equivalent of a synthesis-time generic.

/// Bit-manipulation coprocessor (controller FSM, engines, helpers).
pub mod bitmanip;
/// Companion base-ISA shifter unit.
pub mod shifter;

/// Execution-engine interface shared by both strategies of a unit.
///
/// The latency contract is part of the interface: completion is reported
/// through [`ExecutionStrategy::step`] returning `Some` rather than assumed
/// as a fixed delay. Single-cycle strategies report completion on the first
/// step after [`ExecutionStrategy::start`]; iterative strategies take an
/// operand-dependent number of steps. Both strategies of a unit must be
/// drop-in substitutes: identical inputs produce bit-identical results,
/// differing only in cycles consumed.
pub trait ExecutionStrategy<Op> {
    /// `true` when results are available the same cycle an operation starts.
    ///
    /// The controller uses this to decide whether an operation needs the
    /// multi-cycle dispatch path.
    fn is_single_cycle(&self) -> bool;

    /// Latches operands and begins an operation.
    fn start(&mut self, op: Op, value: u32, amount: u8);

    /// Advances the engine by one clock edge.
    ///
    /// Returns `Some(result)` exactly on the completion cycle and `None`
    /// while the operation is still in flight. Calling `step` with no
    /// operation in flight returns `None`.
    fn step(&mut self) -> Option<u32>;

    /// Cancels the in-flight operation (trap abort). The partial result is
    /// discarded; the engine reports not-running immediately afterwards.
    fn cancel(&mut self);

    /// `true` while an operation is in flight.
    fn is_running(&self) -> bool;
}
