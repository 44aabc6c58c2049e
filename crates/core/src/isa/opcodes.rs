//! Encoding constants for the supported Zba / Zbb / Zbs and base-shift
//! instructions (RV32).
//!
//! Register-register forms are matched on `funct7` (the upper seven bits of
//! the funct12 field — the low five are the `rs2` index); unary
//! register-immediate forms are matched on the full 12-bit field.

// ── funct3 codes ──────────────────────────────────────────────────────────

/// AND with inverted operand (`andn`).
pub const F3_ANDN: u8 = 0b111;
/// OR with inverted operand (`orn`).
pub const F3_ORN: u8 = 0b110;
/// Exclusive NOR (`xnor`).
pub const F3_XNOR: u8 = 0b100;

/// Minimum, signed (`min`).
pub const F3_MIN: u8 = 0b100;
/// Minimum, unsigned (`minu`).
pub const F3_MINU: u8 = 0b101;
/// Maximum, signed (`max`).
pub const F3_MAX: u8 = 0b110;
/// Maximum, unsigned (`maxu`).
pub const F3_MAXU: u8 = 0b111;

/// Rotate left (`rol`); also the unary-op group (`clz`/`ctz`/`cpop`/
/// `sext.b`/`sext.h`) and the single-bit set/clear/invert group on OP-IMM.
pub const F3_ROL: u8 = 0b001;
/// Rotate right (`ror`/`rori`); also `orc.b`, `rev8`, and `bext`/`bexti`.
pub const F3_ROR: u8 = 0b101;

/// Shift-add by 1 (`sh1add`).
pub const F3_SH1ADD: u8 = 0b010;
/// Shift-add by 2 (`sh2add`).
pub const F3_SH2ADD: u8 = 0b100;
/// Shift-add by 3 (`sh3add`).
pub const F3_SH3ADD: u8 = 0b110;

/// Zero-extend halfword (`zext.h`, register form with `rs2 = 0`).
pub const F3_ZEXT_H: u8 = 0b100;

/// Shift left logical (`sll`/`slli`).
pub const F3_SLL: u8 = 0b001;
/// Shift right (`srl`/`sra` and immediate forms; split by funct7).
pub const F3_SR: u8 = 0b101;

// ── funct7 codes (funct12 bits 11:5) ──────────────────────────────────────

/// `andn` / `orn` / `xnor`, and `sra`/`srai` in the base shift group.
pub const F7_LOGIC_INV: u8 = 0b0100000;
/// `min` / `minu` / `max` / `maxu`.
pub const F7_MINMAX: u8 = 0b0000101;
/// `rol` / `ror` / `rori`, and the unary Zbb group on OP-IMM.
pub const F7_ROTATE: u8 = 0b0110000;
/// `sh1add` / `sh2add` / `sh3add`.
pub const F7_SHADD: u8 = 0b0010000;
/// `bclr` / `bclri` and `bext` / `bexti`.
pub const F7_BCLR_BEXT: u8 = 0b0100100;
/// `binv` / `binvi`.
pub const F7_BINV: u8 = 0b0110100;
/// `bset` / `bseti`.
pub const F7_BSET: u8 = 0b0010100;
/// Base shifts (`sll`/`srl` and immediate forms).
pub const F7_SHIFT: u8 = 0b0000000;

// ── Full funct12 codes (unary and fixed-rs2 forms) ────────────────────────

/// Count leading zeros (`clz`).
pub const F12_CLZ: u16 = 0b0110000_00000;
/// Count trailing zeros (`ctz`).
pub const F12_CTZ: u16 = 0b0110000_00001;
/// Population count (`cpop`).
pub const F12_CPOP: u16 = 0b0110000_00010;
/// Sign-extend byte (`sext.b`).
pub const F12_SEXT_B: u16 = 0b0110000_00100;
/// Sign-extend halfword (`sext.h`).
pub const F12_SEXT_H: u16 = 0b0110000_00101;
/// OR-combine bytes (`orc.b`).
pub const F12_ORC_B: u16 = 0b0010100_00111;
/// Byte reverse (`rev8`, RV32 form).
pub const F12_REV8: u16 = 0b0110100_11000;
/// Zero-extend halfword (`zext.h`, register form with `rs2 = 0`).
pub const F12_ZEXT_H: u16 = 0b0000100_00000;

/// Number of bits the funct12 field is shifted right to obtain funct7.
pub const FUNCT7_IN_FUNCT12_SHIFT: u16 = 5;

/// Extracts the funct7 pattern (bits 11:5) from a funct12 field.
pub const fn funct7_of(funct12: u16) -> u8 {
    (funct12 >> FUNCT7_IN_FUNCT12_SHIFT) as u8
}
