//! Instruction-set definitions for the shift and bit-manipulation unit.
//!
//! This module covers the slice of the RISC-V ISA the unit executes:
//! 1. **Fields:** Opcode-class selection and raw-encoding field extraction.
//! 2. **Opcodes:** funct3 / funct7 / funct12 patterns for Zba, Zbb, Zbs,
//!    and the base-ISA shifts.
//! 3. **Decode:** Pure functions mapping instruction fields to exactly one
//!    operation per legal encoding.

/// Pure operation decoders (bit-manipulation and base-ISA shifts).
pub mod decode;
/// Opcode classes and raw-encoding field extraction.
pub mod fields;
/// Encoding constants (funct3 / funct7 / funct12 patterns).
pub mod opcodes;

pub use fields::OpClass;
