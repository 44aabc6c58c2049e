//! Engine Latency Contracts.
//!
//! The two strategies are drop-in equivalent in results but not in timing;
//! these tests pin the cycle counts down exactly. Serial latencies include
//! the start tick and the controller's dispatch bridge tick:
//!
//! - rotate: `shamt + 2` ticks (`shamt = 0` still pays one engine step, 3).
//! - zero scans: `count + 3` ticks; an all-zero word scans the full register
//!   plus the first injected bit, 35.
//! - population count: a fixed full-register sweep, 34.
//!
//! Barrel builds complete every operation on the start tick.

use bmu_core::config::{Config, Strategy};
use bmu_core::core::units::bitmanip::BitmanipUnit;
use bmu_core::core::signals::UnitInput;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::encode::{reg_op, unary_op};
use crate::common::harness::run_to_valid;

const F7_ROTATE: u8 = 0b0110000;
const F12_CLZ: u16 = 0b0110000_00000;
const F12_CTZ: u16 = 0b0110000_00001;
const F12_CPOP: u16 = 0b0110000_00010;

fn measure(strategy: Strategy, input: &UnitInput) -> (u32, u32) {
    let mut unit = BitmanipUnit::new(&Config::uniform(strategy));
    run_to_valid(|cycle| unit.tick(cycle), input)
}

// ─── Barrel: everything is single-cycle ──────────────────────────────────────

#[rstest]
#[case(reg_op(F7_ROTATE, 0b001, 0xDEAD_BEEF, 17))]
#[case(reg_op(F7_ROTATE, 0b101, 0xDEAD_BEEF, 31))]
#[case(unary_op(0b001, F12_CLZ, 0))]
#[case(unary_op(0b001, F12_CTZ, 0))]
#[case(unary_op(0b001, F12_CPOP, 0xFFFF_FFFF))]
fn barrel_completes_on_the_start_tick(#[case] input: UnitInput) {
    let (_result, cycles) = measure(Strategy::Barrel, &input);
    assert_eq!(cycles, 1);
}

// ─── Serial: rotate pays one cycle per bit of the amount ─────────────────────

#[rstest]
#[case(1)]
#[case(4)]
#[case(17)]
#[case(31)]
fn serial_rotate_latency_tracks_the_amount(#[case] shamt: u32) {
    let (result, cycles) = measure(Strategy::Serial, &reg_op(F7_ROTATE, 0b001, 1, shamt));
    assert_eq!(result, 1u32.rotate_left(shamt));
    assert_eq!(cycles, shamt + 2);
}

#[test]
fn serial_rotate_by_zero_still_pays_one_engine_step() {
    let (result, cycles) = measure(Strategy::Serial, &reg_op(F7_ROTATE, 0b101, 0xCAFE_BABE, 0));
    assert_eq!(result, 0xCAFE_BABE);
    assert_eq!(cycles, 3);
}

// ─── Serial: scans stop the cycle the tested bit reads one ───────────────────

#[rstest]
#[case(0x8000_0000, 0)]
#[case(0x0100_0000, 7)]
#[case(0x0000_0001, 31)]
fn serial_clz_latency_tracks_the_count(#[case] rs1: u32, #[case] count: u32) {
    let (result, cycles) = measure(Strategy::Serial, &unary_op(0b001, F12_CLZ, rs1));
    assert_eq!(result, count);
    assert_eq!(cycles, count + 3);
}

#[rstest]
#[case(0x0000_0001, 0)]
#[case(0x0000_0080, 7)]
#[case(0x8000_0000, 31)]
fn serial_ctz_latency_tracks_the_count(#[case] rs1: u32, #[case] count: u32) {
    let (result, cycles) = measure(Strategy::Serial, &unary_op(0b001, F12_CTZ, rs1));
    assert_eq!(result, count);
    assert_eq!(cycles, count + 3);
}

#[rstest]
#[case(F12_CLZ)]
#[case(F12_CTZ)]
fn serial_scan_of_zero_sweeps_the_full_register(#[case] funct12: u16) {
    // 32 shifts plus the test of the first injected bit plus the start and
    // dispatch ticks.
    let (result, cycles) = measure(Strategy::Serial, &unary_op(0b001, funct12, 0));
    assert_eq!(result, 32);
    assert_eq!(cycles, 35);
}

// ─── Serial: population count is a fixed full sweep ──────────────────────────

#[rstest]
#[case(0)]
#[case(1)]
#[case(0xFFFF_FFFF)]
#[case(0xAAAA_AAAA)]
fn serial_popcount_latency_is_operand_independent(#[case] rs1: u32) {
    let (result, cycles) = measure(Strategy::Serial, &unary_op(0b001, F12_CPOP, rs1));
    assert_eq!(result, rs1.count_ones());
    assert_eq!(cycles, 34);
}

// ─── Serial: the non-iterative operations never go multi-cycle ───────────────

#[test]
fn serial_build_keeps_combinational_operations_single_cycle() {
    // andn settles in the helpers even when the serial engine is configured.
    let (result, cycles) = measure(Strategy::Serial, &reg_op(0b0100000, 0b111, 0xFF00, 0x0F00));
    assert_eq!(result, 0xF000);
    assert_eq!(cycles, 1);
}
