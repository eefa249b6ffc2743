//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading and validation.

use std::io::Write;

use mau_core::MauError;
use mau_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.serial, SerialConfig::default());
    assert!(!config.trace.enabled);
    config.validate().unwrap();
}

#[test]
fn test_serial_config_defaults() {
    let serial = SerialConfig::default();
    assert_eq!(serial.half_period, 5);
    assert_eq!(serial.settle_cycles, 5);
    assert_eq!(serial.idle_gap, 5);
    assert_eq!(serial.reset_cycles, 2);
    assert_eq!(serial.result_lead_time(), 20);
}

#[test]
fn test_empty_document_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_document() {
    let json = r#"{
        "serial": { "half_period": 1, "settle_cycles": 2 },
        "trace": { "enabled": true }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.serial.half_period, 1);
    assert_eq!(config.serial.settle_cycles, 2);
    assert_eq!(config.serial.idle_gap, 5);
    assert!(config.trace.enabled);
}

#[test]
fn test_half_period_zero_rejected() {
    let err = Config::from_json(r#"{ "serial": { "half_period": 0 } }"#).unwrap_err();
    match err {
        MauError::InvalidConfig(msg) => assert!(msg.contains("half_period"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lead_time_below_fill_latency_rejected() {
    // 1 + 3 * 1 = 4 < 5
    let serial = SerialConfig {
        half_period: 1,
        settle_cycles: 1,
        ..SerialConfig::default()
    };
    assert!(matches!(serial.validate(), Err(MauError::InvalidConfig(_))));

    // 2 + 3 * 1 = 5
    let serial = SerialConfig {
        settle_cycles: 2,
        ..serial
    };
    serial.validate().unwrap();
}

#[test]
fn test_zero_reset_cycles_rejected() {
    let err = Config::from_json(r#"{ "serial": { "reset_cycles": 0 } }"#).unwrap_err();
    match err {
        MauError::InvalidConfig(msg) => assert!(msg.contains("reset_cycles"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
    let serial = SerialConfig {
        reset_cycles: 1,
        ..SerialConfig::default()
    };
    serial.validate().unwrap();
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json("{ serial: }"),
        Err(MauError::ConfigParse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "serial": { "half_period": "fast" } }"#),
        Err(MauError::ConfigParse(_))
    ));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "serial": {{ "idle_gap": 9 }} }}"#).unwrap();
    let config = Config::from_path(file.path()).unwrap();
    assert_eq!(config.serial.idle_gap, 9);
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MauError::Io(_)));
}
