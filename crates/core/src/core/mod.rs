//! Execution core (signals, functional units, top-level fan-out).
//!
//! The core owns the two sibling execution units and routes each start pulse
//! to exactly one of them based on the presented encoding. The per-unit
//! controllers live in [`units`]; this module only provides the fan-out a
//! surrounding pipeline would wire up.

/// Control signals and operation types.
pub mod signals;
/// Functional units (bit-manipulation coprocessor, base-ISA shifter).
pub mod units;

use crate::config::Config;
use crate::core::signals::{UnitInput, UnitOutput};
use crate::core::units::bitmanip::BitmanipUnit;
use crate::core::units::shifter::ShiftUnit;
use crate::isa::decode::decode_shift;

/// Top-level execution core owning both functional units.
///
/// Every legal encoding is claimed by exactly one unit, so the per-cycle
/// outputs can be merged with the same mask-and-OR idiom the units use
/// internally: at most one of them asserts `valid` on any tick.
#[derive(Debug)]
pub struct ExecCore {
    /// Bit-manipulation coprocessor (Zba / Zbb / Zbs).
    pub bitmanip: BitmanipUnit,
    /// Companion base-ISA shifter.
    pub shifter: ShiftUnit,
}

impl ExecCore {
    /// Creates an idle core with the configured engine strategies.
    pub const fn new(config: &Config) -> Self {
        Self {
            bitmanip: BitmanipUnit::new(config),
            shifter: ShiftUnit::new(config),
        }
    }

    /// Advances both units by one clock cycle.
    ///
    /// A start pulse is steered to the shifter when the encoding is a base
    /// shift and to the bit-manipulation unit otherwise; both units observe
    /// the cycle (and the trap level) either way.
    pub fn tick(&mut self, input: &UnitInput) -> UnitOutput {
        let is_shift =
            input.start && decode_shift(input.class, input.funct3, input.funct12).is_ok();

        let shifter_input = UnitInput {
            start: input.start && is_shift,
            ..*input
        };
        let bitmanip_input = UnitInput {
            start: input.start && !is_shift,
            ..*input
        };

        let shifter_out = self.shifter.tick(&shifter_input);
        let bitmanip_out = self.bitmanip.tick(&bitmanip_input);

        UnitOutput {
            result: shifter_out.result | bitmanip_out.result,
            valid: shifter_out.valid || bitmanip_out.valid,
        }
    }
}
