//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and the
//! strategy-selection enum.

use bmu_core::config::{Config, Strategy, UnitConfig};

#[test]
fn test_config_default_is_barrel_everywhere() {
    let config = Config::default();
    assert_eq!(config.bitmanip.strategy, Strategy::Barrel);
    assert_eq!(config.shifter.strategy, Strategy::Barrel);
}

#[test]
fn test_unit_config_default() {
    let unit = UnitConfig::default();
    assert_eq!(unit.strategy, Strategy::Barrel);
}

#[test]
fn test_uniform_builder() {
    let config = Config::uniform(Strategy::Serial);
    assert_eq!(config.bitmanip.strategy, Strategy::Serial);
    assert_eq!(config.shifter.strategy, Strategy::Serial);
}

#[test]
fn test_json_full_deserialization() {
    let json = r#"{
        "bitmanip": { "strategy": "Serial" },
        "shifter": { "strategy": "Barrel" }
    }"#;
    let config: Config = match serde_json::from_str(json) {
        Ok(config) => config,
        Err(err) => panic!("deserialization failed: {err}"),
    };
    assert_eq!(config.bitmanip.strategy, Strategy::Serial);
    assert_eq!(config.shifter.strategy, Strategy::Barrel);
}

#[test]
fn test_json_partial_uses_defaults() {
    let json = r#"{ "shifter": { "strategy": "Serial" } }"#;
    let config: Config = match serde_json::from_str(json) {
        Ok(config) => config,
        Err(err) => panic!("deserialization failed: {err}"),
    };
    assert_eq!(config.bitmanip.strategy, Strategy::Barrel);
    assert_eq!(config.shifter.strategy, Strategy::Serial);
}

#[test]
fn test_json_rejects_unknown_strategy() {
    let json = r#"{ "bitmanip": { "strategy": "Pipelined" } }"#;
    let parsed: Result<Config, _> = serde_json::from_str(json);
    assert!(parsed.is_err(), "unknown strategy variant must be rejected");
}
