//! # Configuration Tests
//!
//! Loading `HarnessConfig` from JSON strings and files, and building harnesses from it.

use std::io::Write;

use rvharness_core::common::HarnessError;
use rvharness_core::dut::ReferenceCore;
use rvharness_core::soc::DeviceKind;
use rvharness_core::{DesignHarness, HarnessConfig};
use tempfile::NamedTempFile;

#[test]
fn partial_document_keeps_defaults() {
    let config = HarnessConfig::from_json(r#"{ "trials": 32 }"#).unwrap();
    assert_eq!(config.trials, 32);
    assert!(config.colour);
    assert_eq!(config.seed, None);
    assert_eq!(config.devices, DeviceKind::MAIN_LAYOUT.to_vec());
}

#[test]
fn config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "seed": 7, "colour": false, "devices": ["Memory", "Null"] }}"#).unwrap();
    file.flush().unwrap();

    let config = HarnessConfig::from_file(file.path()).unwrap();
    assert_eq!(config.seed, Some(7));
    assert!(!config.colour);
}

#[test]
fn unknown_device_kind_is_a_config_error() {
    let err = HarnessConfig::from_json(r#"{ "devices": ["Uart"] }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HarnessConfig::from_file(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}

#[test]
fn layout_from_config_must_fit_the_core() {
    let config = HarnessConfig::from_json(r#"{ "devices": ["Memory", "Null", "Null"] }"#).unwrap();
    let err = DesignHarness::from_config(ReferenceCore::new(), &config).unwrap_err();
    assert!(matches!(err, HarnessError::DeviceLayout { expected: 2, found: 3 }));
}

#[test]
fn memory_above_the_boundary_is_rejected() {
    let config = HarnessConfig::from_json(r#"{ "devices": ["Memory", "Memory"] }"#).unwrap();
    let err = DesignHarness::from_config(ReferenceCore::new(), &config).unwrap_err();
    assert!(matches!(err, HarnessError::MemoryTooLarge { slot: 1, .. }));
}

#[test]
fn empty_document_yields_defaults() {
    let config = HarnessConfig::from_json("{}").unwrap();
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = HarnessConfig::from_json(r#"{ "sead": 1 }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn filter_matches_substrings() {
    let config = HarnessConfig {
        filter: Some("jal".into()),
        ..HarnessConfig::default()
    };
    assert!(config.selects("jal links and jumps"));
    assert!(!config.selects("lui"));
    assert!(HarnessConfig::default().selects("anything"));
}
