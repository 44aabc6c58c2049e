//! Configuration for the execution-unit simulator.
//!
//! This module defines the structures that parameterize a build of the unit.
//! It provides:
//! 1. **Strategy selection:** Serial (area-optimized, iterative) vs. barrel
//!    (latency-optimized, single-cycle) engines, chosen per unit.
//! 2. **Structures:** A hierarchical config covering the bit-manipulation
//!    coprocessor and the companion base-ISA shifter.
//!
//! Configuration is supplied via JSON or use `Config::default()`. The
//! strategy is fixed at unit construction — it models a synthesis-time
//! generic, not a runtime switch.

use serde::Deserialize;

/// Execution-engine strategy for a functional unit.
///
/// Mirrors the hardware build generic: exactly one engine is instantiated
/// per unit, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Strategy {
    /// Iterative bit-serial engine: minimal area, one bit per cycle,
    /// operand-dependent latency.
    Serial,

    /// Combinational barrel engine: staged mux network, fixed one-cycle
    /// latency regardless of operand values.
    #[default]
    Barrel,
}

/// Configuration of a single functional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Execution-engine strategy used by this unit.
    pub strategy: Strategy,
}

/// Root configuration for the execution core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bit-manipulation coprocessor (Zba/Zbb/Zbs) configuration.
    pub bitmanip: UnitConfig,

    /// Companion base-ISA shifter configuration.
    pub shifter: UnitConfig,
}

impl Config {
    /// Builds a configuration using the same strategy for both units.
    ///
    /// Convenience for test harnesses that sweep strategies.
    pub const fn uniform(strategy: Strategy) -> Self {
        Self {
            bitmanip: UnitConfig { strategy },
            shifter: UnitConfig { strategy },
        }
    }
}
