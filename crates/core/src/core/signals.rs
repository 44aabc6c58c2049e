//! Control signals and operation types for the execution units.
//!
//! This module defines the signals that control one operation's lifetime:
//! 1. **Operation Selectors:** The decoded operation enums (the enumeration
//!    replacement for the hardware one-hot command vectors).
//! 2. **Execution State:** The controller FSM states.
//! 3. **Cycle Interface:** Per-cycle input and output signal bundles and the
//!    operand latch captured on every start pulse.

use crate::isa::OpClass;

/// Direction of a zero-count bit scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitScan {
    /// Count zeros from the most significant bit down (`clz`).
    Leading,

    /// Count zeros from the least significant bit up (`ctz`).
    Trailing,
}

/// Direction of a rotate operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotDir {
    /// Rotate left (`rol`).
    Left,

    /// Rotate right (`ror` / `rori`).
    Right,
}

/// Source-field width of a sign extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtWidth {
    /// Lower 8 bits (`sext.b`).
    Byte,

    /// Lower 16 bits (`sext.h`).
    Half,
}

/// Bit-manipulation operations (Zba / Zbb / Zbs).
///
/// Exactly one variant is active per issued instruction; the decoder
/// guarantees mutual exclusivity over the legal encoding space. Sub-selects
/// that the hardware reads back out of the function fields (scan direction,
/// rotate direction, shift-add amount) are carried as variant payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BitmanipOp {
    /// AND with inverted second operand: `rs1 & !rs2`.
    #[default]
    Andn,

    /// OR with inverted second operand: `rs1 | !rs2`.
    Orn,

    /// Exclusive NOR: `!(rs1 ^ rs2)`.
    Xnor,

    /// Count leading or trailing zeros of `rs1`.
    CountZeros(BitScan),

    /// Population count of `rs1`.
    Cpop,

    /// Two-way minimum/maximum select driven by the external comparator.
    MinMax {
        /// Select the maximum instead of the minimum.
        max: bool,
        /// Unsigned comparison mode (consumed by the external comparator;
        /// latched here so the issued sub-operation is fully described).
        unsigned: bool,
    },

    /// Sign-extend the lower byte or halfword of `rs1`.
    SignExtend(ExtWidth),

    /// Zero-extend the lower halfword of `rs1`.
    ZextH,

    /// Rotate `rs1` by `shamt` bits.
    Rotate(RotDir),

    /// OR-combine within each byte lane of `rs1`.
    Orcb,

    /// Reverse the byte order of `rs1`.
    Rev8,

    /// Address-generation shift-add: `(rs1 << shift) + rs2`.
    ShiftAdd {
        /// Left-shift amount applied to `rs1` (1, 2, or 3).
        shift: u8,
    },

    /// Clear the bit of `rs1` at index `shamt`.
    Bclr,

    /// Extract the bit of `rs1` at index `shamt` (result is 0 or 1).
    Bext,

    /// Invert the bit of `rs1` at index `shamt`.
    Binv,

    /// Set the bit of `rs1` at index `shamt`.
    Bset,
}

impl BitmanipOp {
    /// `true` for operations the serial engine executes over multiple cycles.
    ///
    /// Everything else settles combinationally regardless of strategy.
    pub const fn is_iterative(self) -> bool {
        matches!(self, Self::CountZeros(_) | Self::Cpop | Self::Rotate(_))
    }
}

/// Base-ISA shift operations executed by the companion shifter unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShiftOp {
    /// Shift left logical.
    #[default]
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,
}

/// Controller FSM state.
///
/// `Idle` is the initial and terminal state between instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecState {
    /// Waiting for a start pulse. Single-cycle operations complete without
    /// leaving this state.
    #[default]
    Idle,

    /// One-cycle bridge giving the serial engine its initialization edge.
    Dispatch,

    /// A multi-cycle operation is in flight; ends on engine completion or a
    /// trap abort.
    Busy,
}

/// Externally computed comparator flags, latched at issue.
///
/// Only `less` feeds the min/max select; the pair is latched as a unit to
/// mirror the 2-bit comparator bus of the surrounding pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CmpFlags {
    /// `rs1 == rs2`.
    pub equal: bool,

    /// `rs1 < rs2` under the sign mode of the issued instruction.
    pub less: bool,
}

/// Per-cycle input signals presented to a unit.
///
/// One `tick` call consumes one of these; all fields are sampled on that
/// clock edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitInput {
    /// Start pulse: latch operands and begin the decoded operation.
    pub start: bool,

    /// Trap level, sampled while the unit is busy; forces termination.
    pub trap: bool,

    /// Opcode class of the presented encoding.
    pub class: OpClass,

    /// 3-bit function field.
    pub funct3: u8,

    /// 12-bit function field (instruction bits 31:20).
    pub funct12: u16,

    /// First source operand.
    pub rs1: u32,

    /// Second source operand.
    pub rs2: u32,

    /// Shift amount (5 bits; upper bits ignored).
    pub shamt: u8,

    /// Externally computed comparator flags.
    pub cmp: CmpFlags,
}

/// Per-cycle output signals of a unit.
///
/// `result` is meaningful only on ticks where `valid` is high; it reads zero
/// on every other tick (the output gate loads the result register only on
/// normal completion).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitOutput {
    /// Word-width result of the completed operation.
    pub result: u32,

    /// One-cycle completion pulse.
    pub valid: bool,
}

/// Operand latch contents, captured on every start pulse.
///
/// The latch is exclusively owned by the unit for the duration of one
/// operation and is overwritten only by the next start pulse.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperandLatch {
    /// Latched first source operand.
    pub rs1: u32,

    /// Latched second source operand.
    pub rs2: u32,

    /// Latched shift amount.
    pub shamt: u8,

    /// Latched comparator flags.
    pub cmp: CmpFlags,
}

impl OperandLatch {
    /// Captures the operand fields of a start-pulse cycle.
    pub const fn capture(input: &UnitInput) -> Self {
        Self {
            rs1: input.rs1,
            rs2: input.rs2,
            shamt: input.shamt,
            cmp: input.cmp,
        }
    }
}
