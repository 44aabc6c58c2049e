//! Instruction encoding fields.
//!
//! Provides the opcode-class selector presented to the unit by the upstream
//! decoder, plus bit-extraction helpers for carving the function fields out
//! of a raw 32-bit encoding (used by test harnesses and front-end glue).

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct12 field (bits 20-31).
pub const FUNCT12_MASK: u32 = 0xFFF;

/// Bit shift for the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit shift for the funct12 field.
const FUNCT12_SHIFT: u32 = 20;

/// Major opcode of register-register operations (OP, 0b0110011).
pub const OP_REG: u32 = 0b0110011;
/// Major opcode of register-immediate operations (OP-IMM, 0b0010011).
pub const OP_IMM: u32 = 0b0010011;

/// Opcode class of an encoding presented to the unit.
///
/// The unit only distinguishes the two integer computational classes; the
/// upstream pipeline guarantees anything else never reaches the start pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpClass {
    /// Register-register form (major opcode OP). The second operand and the
    /// shift amount come from `rs2`.
    #[default]
    Register,

    /// Register-immediate form (major opcode OP-IMM). The shift amount comes
    /// from the immediate field.
    Immediate,
}

impl OpClass {
    /// Classifies a major opcode.
    ///
    /// Returns `None` for opcodes outside the two integer computational
    /// classes this unit executes.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode & OPCODE_MASK {
            OP_REG => Some(Self::Register),
            OP_IMM => Some(Self::Immediate),
            _ => None,
        }
    }
}

/// Extracts the funct3 field (bits 14:12) from a raw encoding.
pub const fn funct3(raw: u32) -> u8 {
    ((raw >> FUNCT3_SHIFT) & FUNCT3_MASK) as u8
}

/// Extracts the funct12 field (bits 31:20) from a raw encoding.
///
/// For register-register forms the low five bits of this field are the `rs2`
/// index; decoders for those forms only match the upper seven bits.
pub const fn funct12(raw: u32) -> u16 {
    ((raw >> FUNCT12_SHIFT) & FUNCT12_MASK) as u16
}

/// Extracts the major opcode field (bits 6:0) from a raw encoding.
pub const fn opcode(raw: u32) -> u32 {
    raw & OPCODE_MASK
}
