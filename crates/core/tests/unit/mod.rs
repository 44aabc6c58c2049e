//! # Unit Components
//!
//! This module serves as the central hub for the unit-level tests. It
//! organizes the test groups by the source module they exercise.

/// Unit tests for the configuration structures (defaults, JSON
/// deserialization, strategy selection).
pub mod config;
