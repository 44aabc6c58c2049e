//! Operation decoders.
//!
//! Pure functions mapping (opcode class, funct3, funct12) to exactly one
//! operation per legal encoding. Register-register forms match on the upper
//! seven bits of the funct12 field (funct7); unary register-immediate forms
//! match the full field. The decoders never inspect operand values and have
//! no side effects.
//!
//! Legality checking belongs to the upstream pipeline; anything that matches
//! no supported pattern is rejected with [`DecodeError::Unsupported`].

use crate::common::DecodeError;
use crate::core::signals::{BitScan, BitmanipOp, ExtWidth, RotDir, ShiftOp};
use crate::isa::fields::OpClass;
use crate::isa::opcodes::{self, funct7_of};

/// Decodes a bit-manipulation (Zba / Zbb / Zbs) operation.
///
/// # Errors
///
/// Returns [`DecodeError::Unsupported`] when the field triple matches no
/// supported instruction.
pub fn decode(class: OpClass, funct3: u8, funct12: u16) -> Result<BitmanipOp, DecodeError> {
    match class {
        OpClass::Register => decode_register(funct3, funct12),
        OpClass::Immediate => decode_immediate(funct3, funct12),
    }
    .ok_or(DecodeError::Unsupported {
        class,
        funct3,
        funct12,
    })
}

/// Decodes a base-ISA shift operation for the companion shifter unit.
///
/// Both register (`sll`/`srl`/`sra`) and immediate (`slli`/`srli`/`srai`)
/// forms map onto the same three operations.
///
/// # Errors
///
/// Returns [`DecodeError::Unsupported`] when the field triple is not a base
/// shift.
pub fn decode_shift(class: OpClass, funct3: u8, funct12: u16) -> Result<ShiftOp, DecodeError> {
    match (funct3, funct7_of(funct12)) {
        (opcodes::F3_SLL, opcodes::F7_SHIFT) => Ok(ShiftOp::Sll),
        (opcodes::F3_SR, opcodes::F7_SHIFT) => Ok(ShiftOp::Srl),
        (opcodes::F3_SR, opcodes::F7_LOGIC_INV) => Ok(ShiftOp::Sra),
        _ => Err(DecodeError::Unsupported {
            class,
            funct3,
            funct12,
        }),
    }
}

/// Register-register (OP class) patterns.
fn decode_register(funct3: u8, funct12: u16) -> Option<BitmanipOp> {
    // zext.h is a full-funct12 match: its rs2 field is architecturally zero.
    if funct3 == opcodes::F3_ZEXT_H && funct12 == opcodes::F12_ZEXT_H {
        return Some(BitmanipOp::ZextH);
    }

    match (funct7_of(funct12), funct3) {
        (opcodes::F7_LOGIC_INV, opcodes::F3_ANDN) => Some(BitmanipOp::Andn),
        (opcodes::F7_LOGIC_INV, opcodes::F3_ORN) => Some(BitmanipOp::Orn),
        (opcodes::F7_LOGIC_INV, opcodes::F3_XNOR) => Some(BitmanipOp::Xnor),

        (opcodes::F7_MINMAX, opcodes::F3_MIN) => Some(BitmanipOp::MinMax {
            max: false,
            unsigned: false,
        }),
        (opcodes::F7_MINMAX, opcodes::F3_MINU) => Some(BitmanipOp::MinMax {
            max: false,
            unsigned: true,
        }),
        (opcodes::F7_MINMAX, opcodes::F3_MAX) => Some(BitmanipOp::MinMax {
            max: true,
            unsigned: false,
        }),
        (opcodes::F7_MINMAX, opcodes::F3_MAXU) => Some(BitmanipOp::MinMax {
            max: true,
            unsigned: true,
        }),

        (opcodes::F7_ROTATE, opcodes::F3_ROL) => Some(BitmanipOp::Rotate(RotDir::Left)),
        (opcodes::F7_ROTATE, opcodes::F3_ROR) => Some(BitmanipOp::Rotate(RotDir::Right)),

        (opcodes::F7_SHADD, opcodes::F3_SH1ADD) => Some(BitmanipOp::ShiftAdd { shift: 1 }),
        (opcodes::F7_SHADD, opcodes::F3_SH2ADD) => Some(BitmanipOp::ShiftAdd { shift: 2 }),
        (opcodes::F7_SHADD, opcodes::F3_SH3ADD) => Some(BitmanipOp::ShiftAdd { shift: 3 }),

        (opcodes::F7_BCLR_BEXT, opcodes::F3_ROL) => Some(BitmanipOp::Bclr),
        (opcodes::F7_BCLR_BEXT, opcodes::F3_ROR) => Some(BitmanipOp::Bext),
        (opcodes::F7_BINV, opcodes::F3_ROL) => Some(BitmanipOp::Binv),
        (opcodes::F7_BSET, opcodes::F3_ROL) => Some(BitmanipOp::Bset),

        _ => None,
    }
}

/// Register-immediate (OP-IMM class) patterns.
fn decode_immediate(funct3: u8, funct12: u16) -> Option<BitmanipOp> {
    // Unary Zbb operations encode the sub-operation in the full immediate.
    match (funct3, funct12) {
        (opcodes::F3_ROL, opcodes::F12_CLZ) => {
            return Some(BitmanipOp::CountZeros(BitScan::Leading));
        }
        (opcodes::F3_ROL, opcodes::F12_CTZ) => {
            return Some(BitmanipOp::CountZeros(BitScan::Trailing));
        }
        (opcodes::F3_ROL, opcodes::F12_CPOP) => return Some(BitmanipOp::Cpop),
        (opcodes::F3_ROL, opcodes::F12_SEXT_B) => {
            return Some(BitmanipOp::SignExtend(ExtWidth::Byte));
        }
        (opcodes::F3_ROL, opcodes::F12_SEXT_H) => {
            return Some(BitmanipOp::SignExtend(ExtWidth::Half));
        }
        (opcodes::F3_ROR, opcodes::F12_ORC_B) => return Some(BitmanipOp::Orcb),
        (opcodes::F3_ROR, opcodes::F12_REV8) => return Some(BitmanipOp::Rev8),
        _ => {}
    }

    // Shamt-carrying immediate forms match on funct7 like the register forms.
    match (funct7_of(funct12), funct3) {
        (opcodes::F7_ROTATE, opcodes::F3_ROR) => Some(BitmanipOp::Rotate(RotDir::Right)),
        (opcodes::F7_BCLR_BEXT, opcodes::F3_ROL) => Some(BitmanipOp::Bclr),
        (opcodes::F7_BCLR_BEXT, opcodes::F3_ROR) => Some(BitmanipOp::Bext),
        (opcodes::F7_BINV, opcodes::F3_ROL) => Some(BitmanipOp::Binv),
        (opcodes::F7_BSET, opcodes::F3_ROL) => Some(BitmanipOp::Bset),
        _ => None,
    }
}
