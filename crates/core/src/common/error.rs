//! Decode rejection error.
//!
//! The unit itself has no error-reporting channel: legality checking belongs
//! to the upstream pipeline. The decoder nevertheless rejects unsupported
//! encodings with a typed error so that callers (and tests) get a defined,
//! fail-fast outcome instead of an unspecified result.

use thiserror::Error;

use crate::isa::OpClass;

/// Error returned when instruction fields match no supported operation.
///
/// A start pulse carrying an undecodable encoding is ignored by the unit
/// (it stays idle and asserts no `valid`); the error itself is only visible
/// through the public decoder entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The (class, funct3, funct12) triple matches no supported instruction.
    #[error("unsupported {class:?} encoding: funct3={funct3:#05b} funct12={funct12:#014b}")]
    Unsupported {
        /// Opcode class the encoding was presented under.
        class: OpClass,
        /// 3-bit function field of the rejected encoding.
        funct3: u8,
        /// 12-bit function field (instruction bits 31:20) of the rejected encoding.
        funct12: u16,
    },
}
