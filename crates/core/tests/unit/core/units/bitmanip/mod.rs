//! Bit-manipulation coprocessor tests.

/// Serial/barrel latency contracts.
pub mod engines;

/// Serial-vs-barrel drop-in equivalence properties.
pub mod equivalence;
