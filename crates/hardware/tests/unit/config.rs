//! Configuration Tests.
//!
//! Verifies JSON parsing and defaults, the reference preload and how the
//! initial state is validated when applied to a CPU.

use crate::common::harness::TestContext;
use pretty_assertions::assert_eq;
use rvsc_core::common::SimError;
use rvsc_core::common::constants::MAX_MEMORY_WORDS;
use rvsc_core::config::{Config, InitialState};
use rvsc_core::core::Cpu;
use rvsc_core::core::memory::Program;
use std::collections::BTreeMap;
use std::io::Write;

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.memory_words, 32);
    assert!(!config.trace_instructions);
    assert!(config.initial.is_empty());
}

#[test]
fn wrongly_typed_field_is_a_config_error() {
    let err = Config::from_json_str(r#"{ "memory_words": "lots" }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "initial": {{ "registers": {{ "sp": -1 }}, "memory": {{ "8": 4294967295 }} }} }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    let tc = TestContext::with_config(&[], &config);
    assert_eq!(tc.registers(), BTreeMap::from([(2, -1)]));
    assert_eq!(tc.memory(), BTreeMap::from([(8, -1)]));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
}

#[test]
fn reference_preload_matches_lab_values() {
    let tc = TestContext::with_config(&[], &Config::reference_preload());
    assert_eq!(
        tc.registers(),
        BTreeMap::from([(1, 0x20), (2, 0x5), (10, 0x70), (11, 0x4)])
    );
    assert_eq!(tc.memory(), BTreeMap::from([(0x70, 0x5), (0x74, 0x10)]));
}

#[test]
fn preload_to_x0_is_ignored() {
    let tc = TestContext::with_initial(&[], InitialState::default().with_register(0, 99));
    assert_eq!(tc.get_reg(0), 0);
    assert!(tc.registers().is_empty());
}

#[test]
fn invalid_preload_is_rejected_without_partial_writes() {
    let mut cpu = Cpu::new(Program::default(), &Config::default()).unwrap();
    let initial = InitialState::default()
        .with_register(5, 1)
        .with_memory(0x0, 1)
        .with_memory(0x80, 1);

    let err = cpu.apply_initial_state(&initial).unwrap_err();
    assert!(matches!(err, SimError::InvalidInitialState { .. }));
    assert!(cpu.register_snapshot().is_empty());
    assert!(cpu.memory_snapshot().is_empty());
}

#[test]
fn register_index_out_of_range_is_rejected() {
    let config = Config::from_json_str(r#"{ "initial": { "registers": { "x32": 1 } } }"#).unwrap();
    let err = rvsc_core::Simulator::new(Program::default(), &config).unwrap_err();
    assert!(matches!(err, SimError::InvalidInitialState { .. }));
}

#[test]
fn larger_memory_accepts_higher_addresses() {
    let config = Config {
        memory_words: 64,
        initial: InitialState::default().with_memory(0xFC, 3),
        ..Config::default()
    };
    let tc = TestContext::with_config(&[], &config);
    assert_eq!(tc.get_mem(0xFC), 3);
}

#[test]
fn memory_size_limit_is_enforced_before_allocation() {
    let config = Config {
        memory_words: usize::MAX,
        ..Config::default()
    };
    let err = rvsc_core::Simulator::new(Program::default(), &config).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig { .. }));
    assert!(matches!(
        Cpu::new(Program::default(), &config),
        Err(SimError::InvalidConfig { .. })
    ));
}

#[test]
fn memory_size_at_limit_is_accepted() {
    let config = Config {
        memory_words: MAX_MEMORY_WORDS,
        ..Config::default()
    };
    assert!(config.validate().is_ok());
    let json = format!(r#"{{ "memory_words": {} }}"#, MAX_MEMORY_WORDS + 1);
    assert!(matches!(
        Config::from_json_str(&json),
        Err(SimError::InvalidConfig { .. })
    ));
}
