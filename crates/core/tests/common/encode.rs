//! Encoding builders for the cycle-stepped tests.
//!
//! Raw 32-bit encodings are built the way the assembler lays them out, then
//! carved into the field bundle the unit samples, so the tests exercise the
//! same field-extraction path the front end would use.

use bmu_core::core::signals::{CmpFlags, UnitInput};
use bmu_core::isa::fields::{self, OpClass};

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: u32) -> u32 {
    (imm & 0xFFF) << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Start-pulse input bundle carved from a raw encoding.
///
/// The register indices in the raw word are irrelevant to the unit; the
/// operand *values* are supplied here the way the register file would.
pub fn start_from_raw(raw: u32, rs1: u32, rs2: u32, shamt: u8) -> UnitInput {
    UnitInput {
        start: true,
        trap: false,
        class: OpClass::from_opcode(fields::opcode(raw)).unwrap_or_default(),
        funct3: fields::funct3(raw),
        funct12: fields::funct12(raw),
        rs1,
        rs2,
        shamt,
        cmp: CmpFlags::default(),
    }
}

/// Start pulse for a register-register operation.
///
/// The shift amount mirrors the low five bits of `rs2`, as the datapath
/// wires it.
pub fn reg_op(funct7: u8, funct3: u8, rs1: u32, rs2: u32) -> UnitInput {
    UnitInput {
        start: true,
        class: OpClass::Register,
        funct3,
        funct12: u16::from(funct7) << 5 | (rs2 & 0x1F) as u16,
        rs1,
        rs2,
        shamt: (rs2 & 0x1F) as u8,
        ..UnitInput::default()
    }
}

/// Start pulse for a shamt-carrying register-immediate operation.
pub fn imm_op(funct7: u8, funct3: u8, rs1: u32, shamt: u8) -> UnitInput {
    UnitInput {
        start: true,
        class: OpClass::Immediate,
        funct3,
        funct12: u16::from(funct7) << 5 | u16::from(shamt & 0x1F),
        rs1,
        shamt: shamt & 0x1F,
        ..UnitInput::default()
    }
}

/// Start pulse for a unary operation encoded in the full funct12 field.
pub fn unary_op(funct3: u8, funct12: u16, rs1: u32) -> UnitInput {
    UnitInput {
        start: true,
        class: OpClass::Immediate,
        funct3,
        funct12,
        rs1,
        ..UnitInput::default()
    }
}

/// Copies a start pulse with the external comparator flags filled in.
pub fn with_cmp(input: UnitInput, less: bool, equal: bool) -> UnitInput {
    UnitInput {
        cmp: CmpFlags { equal, less },
        ..input
    }
}

/// Quiet cycle: no start pulse, no trap.
pub fn idle_cycle() -> UnitInput {
    UnitInput::default()
}

/// Trap cycle: the external trap level is high, no start pulse.
pub fn trap_cycle() -> UnitInput {
    UnitInput {
        trap: true,
        ..UnitInput::default()
    }
}
