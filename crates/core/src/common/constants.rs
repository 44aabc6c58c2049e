//! Architectural constants for the modeled execution unit.
//!
//! The unit is built for a 32-bit word. Everything that depends on the word
//! width (shift-amount geometry, iteration bounds, lane counts) is derived
//! from the constants here so the relationship stays visible at use sites.

/// Native word width of the modeled processor, in bits.
pub const WORD_WIDTH: u32 = 32;

/// Width of the shift-amount operand in bits (`log2(WORD_WIDTH)`).
pub const SHAMT_BITS: u32 = 5;

/// Mask applied to shift-amount operands (5 bits: 0-31).
pub const SHAMT_MASK: u8 = 0x1F;

/// Most-significant-bit mask of a word (the bit tested by leading-zero scans).
pub const MSB_MASK: u32 = 0x8000_0000;

/// Least-significant-bit mask of a word (the bit tested by trailing-zero scans).
pub const LSB_MASK: u32 = 0x0000_0001;

/// Number of byte lanes in a word (used by `orc.b` and `rev8`).
pub const BYTE_LANES: u32 = WORD_WIDTH / 8;
