//! Serial-vs-Barrel Drop-In Equivalence.
//!
//! The build configuration picks latency or area; it must never pick
//! results. Random operations are driven through one unit of each strategy
//! and the completed results compared — the barrel's single-tick answer
//! against whatever the serial engine converges to.

use bmu_core::config::{Config, Strategy};
use bmu_core::core::units::bitmanip::BitmanipUnit;
use bmu_core::core::signals::UnitInput;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

use crate::common::encode::{imm_op, reg_op, unary_op, with_cmp};
use crate::common::harness::run_to_valid;

fn run(strategy: Strategy, input: &UnitInput) -> u32 {
    let mut unit = BitmanipUnit::new(&Config::uniform(strategy));
    let (result, _cycles) = run_to_valid(|cycle| unit.tick(cycle), input);
    result
}

/// Any decodable start pulse, weighted toward the multi-cycle operations
/// where the two engines actually diverge in mechanism.
fn any_start() -> impl proptest::strategy::Strategy<Value = UnitInput> {
    // (funct7, funct3) pairs of the single-cycle register forms: andn,
    // xnor, sh2add, bclr, bset.
    let single_cycle = prop::sample::select(vec![
        (0b0100000u8, 0b111u8),
        (0b0100000, 0b100),
        (0b0010000, 0b100),
        (0b0100100, 0b001),
        (0b0010100, 0b001),
    ]);
    prop_oneof![
        // Rotates and rotate-immediate.
        (any::<u32>(), 0u32..32).prop_map(|(rs1, rs2)| reg_op(0b0110000, 0b001, rs1, rs2)),
        (any::<u32>(), 0u32..32).prop_map(|(rs1, rs2)| reg_op(0b0110000, 0b101, rs1, rs2)),
        (any::<u32>(), 0u8..32).prop_map(|(rs1, shamt)| imm_op(0b0110000, 0b101, rs1, shamt)),
        // Zero scans and popcount.
        any::<u32>().prop_map(|rs1| unary_op(0b001, 0b0110000_00000, rs1)),
        any::<u32>().prop_map(|rs1| unary_op(0b001, 0b0110000_00001, rs1)),
        any::<u32>().prop_map(|rs1| unary_op(0b001, 0b0110000_00010, rs1)),
        // Single-cycle operations, to confirm the strategies share them.
        (any::<u32>(), any::<u32>(), single_cycle)
            .prop_map(|(a, b, (f7, f3))| reg_op(f7, f3, a, b)),
        (any::<u32>(), 0u8..32).prop_map(|(a, s)| imm_op(0b0010100, 0b001, a, s)),
        any::<u32>().prop_map(|rs1| unary_op(0b101, 0b0110100_11000, rs1)),
        (any::<u32>(), any::<bool>())
            .prop_map(|(b, less)| with_cmp(reg_op(0b0000101, 0b110, 7, b), less, false)),
    ]
}

proptest! {
    /// Both strategies produce the same result for every accepted operation.
    #[test]
    fn strategies_agree_on_every_operation(input in any_start()) {
        prop_assert_eq!(run(Strategy::Barrel, &input), run(Strategy::Serial, &input));
    }

    /// A rotate by any amount matches the reference rotation on both
    /// strategies, including the wrap at zero.
    #[test]
    fn rotates_match_the_reference(rs1 in any::<u32>(), shamt in 0u32..32) {
        let left = run(Strategy::Serial, &reg_op(0b0110000, 0b001, rs1, shamt));
        prop_assert_eq!(left, rs1.rotate_left(shamt));
        let right = run(Strategy::Serial, &reg_op(0b0110000, 0b101, rs1, shamt));
        prop_assert_eq!(right, rs1.rotate_right(shamt));
    }

    /// The serial scans agree with the hardware-reference counts.
    #[test]
    fn scans_match_the_reference(rs1 in any::<u32>()) {
        let clz = run(Strategy::Serial, &unary_op(0b001, 0b0110000_00000, rs1));
        prop_assert_eq!(clz, rs1.leading_zeros());
        let ctz = run(Strategy::Serial, &unary_op(0b001, 0b0110000_00001, rs1));
        prop_assert_eq!(ctz, rs1.trailing_zeros());
        let cpop = run(Strategy::Serial, &unary_op(0b001, 0b0110000_00010, rs1));
        prop_assert_eq!(cpop, rs1.count_ones());
    }
}
