//! Combinational arithmetic helpers.
//!
//! Single-cycle networks feeding the output gate: Zba shift-add, the one-hot
//! generator behind the Zbs single-bit operations, sign/zero extension, byte
//! reversal, per-byte OR-combine, and the comparator-driven min/max select.
//! All helpers are pure functions of the latched operands.

use crate::common::constants::{BYTE_LANES, SHAMT_MASK};
use crate::core::signals::ExtWidth;

/// AND with inverted second operand: `rs1 & !rs2`.
pub const fn andn(rs1: u32, rs2: u32) -> u32 {
    rs1 & !rs2
}

/// OR with inverted second operand: `rs1 | !rs2`.
pub const fn orn(rs1: u32, rs2: u32) -> u32 {
    rs1 | !rs2
}

/// Exclusive NOR: `!(rs1 ^ rs2)`.
pub const fn xnor(rs1: u32, rs2: u32) -> u32 {
    !(rs1 ^ rs2)
}

/// Address-generation shift-add: `(rs1 << shift) + rs2`, wrapping.
///
/// `shift` is 1, 2, or 3, selected by the decoder from the function field.
pub const fn shift_add(rs1: u32, rs2: u32, shift: u8) -> u32 {
    (rs1 << shift).wrapping_add(rs2)
}

/// One-hot mask with exactly one bit set at position `shamt`.
pub const fn one_hot(shamt: u8) -> u32 {
    1 << (shamt & SHAMT_MASK)
}

/// Clears the bit of `rs1` at index `shamt`.
pub const fn bclr(rs1: u32, shamt: u8) -> u32 {
    rs1 & !one_hot(shamt)
}

/// Sets the bit of `rs1` at index `shamt`.
pub const fn bset(rs1: u32, shamt: u8) -> u32 {
    rs1 | one_hot(shamt)
}

/// Inverts the bit of `rs1` at index `shamt`.
pub const fn binv(rs1: u32, shamt: u8) -> u32 {
    rs1 ^ one_hot(shamt)
}

/// Extracts the bit of `rs1` at index `shamt`, zero-extended to word width.
///
/// The AND of `rs1` with the one-hot mask reduces to a single result bit;
/// the result is always 0 or 1.
pub const fn bext(rs1: u32, shamt: u8) -> u32 {
    ((rs1 & one_hot(shamt)) != 0) as u32
}

/// Sign-extends the lower byte or halfword of `rs1` to word width.
pub const fn sign_extend(rs1: u32, width: ExtWidth) -> u32 {
    match width {
        ExtWidth::Byte => rs1 as u8 as i8 as i32 as u32,
        ExtWidth::Half => rs1 as u16 as i16 as i32 as u32,
    }
}

/// Zero-extends the lower halfword of `rs1` to word width.
pub const fn zext_h(rs1: u32) -> u32 {
    rs1 & 0x0000_FFFF
}

/// Reverses the byte order of `rs1`.
pub const fn rev8(rs1: u32) -> u32 {
    rs1.swap_bytes()
}

/// OR-combines within each byte lane: a lane reads 0xFF iff any of its bits
/// is set (an "any bit set in this byte" test).
pub const fn orc_b(rs1: u32) -> u32 {
    let mut word = 0;
    let mut lane = 0;
    while lane < BYTE_LANES {
        if (rs1 >> (lane * 8)) & 0xFF != 0 {
            word |= 0xFF << (lane * 8);
        }
        lane += 1;
    }
    word
}

/// Two-way min/max select driven by the external comparator.
///
/// `less` is the latched `rs1 < rs2` flag; no comparison logic is duplicated
/// here. Selecting the minimum picks `rs1` when `less`, the maximum picks
/// the opposite operand.
pub const fn min_max_select(rs1: u32, rs2: u32, less: bool, max: bool) -> u32 {
    if less != max { rs1 } else { rs2 }
}
