//! Common types shared across the execution core.
//!
//! This module collects the architectural constants of the modeled word width
//! and the typed error returned when an encoding is rejected at decode time.

/// Architectural constants (word width, shift-amount geometry, bit masks).
pub mod constants;
/// Decode rejection error type.
pub mod error;

pub use error::DecodeError;
