//! Cycle-accurate RISC-V shift and bit-manipulation execution unit simulator.
//!
//! This crate models the functional unit that executes the base-ISA integer
//! shifts and the B-extension subsets Zba (address generation), Zbb (basic
//! bit manipulation), and Zbs (single-bit instructions) of a 32-bit RISC-V
//! core, with the following:
//! 1. **ISA:** Encoding constants and a pure decoder mapping instruction
//!    fields to exactly one operation per legal encoding.
//! 2. **Core:** Controller state machines, serial (bit-per-cycle) and barrel
//!    (single-cycle) execution engines, combinational helpers, output gates.
//! 3. **Configuration:** Build-time strategy selection (serial vs. barrel)
//!    per unit, deserializable from JSON.
//! 4. **Simulation:** An explicit one-tick-per-call clocking model suitable
//!    for cycle-stepped test harnesses.

/// Common types and constants (word width, shift-amount masks, decode errors).
pub mod common;
/// Simulator configuration (execution-strategy selection per unit).
pub mod config;
/// Execution core (signals, controller FSMs, engines, helpers).
pub mod core;
/// Instruction fields, encoding constants, and the operation decoder.
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level execution core owning the bit-manipulation and shifter units.
pub use crate::core::ExecCore;
/// Per-cycle input and output signal bundles.
pub use crate::core::signals::{UnitInput, UnitOutput};
