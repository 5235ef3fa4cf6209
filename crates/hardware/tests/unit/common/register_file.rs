//! Register File Unit Tests.
//!
//! Verifies the `x0` hard-wiring, write visibility and the sparse snapshot.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rvsc_core::common::RegisterFile;
use std::collections::BTreeMap;

#[test]
fn fresh_register_file_is_all_zero() {
    let regs = RegisterFile::new();
    for idx in 0..32 {
        assert_eq!(regs.read(idx), 0);
    }
    assert!(regs.snapshot().is_empty());
}

#[test]
fn write_to_x0_is_discarded() {
    let mut regs = RegisterFile::new();
    assert!(!regs.write(0, 123));
    assert_eq!(regs.read(0), 0);
}

#[test]
fn snapshot_lists_only_non_zero_registers() {
    let mut regs = RegisterFile::new();
    let _ = regs.write(5, -1);
    let _ = regs.write(12, 5);
    let _ = regs.write(13, 0);
    assert_eq!(regs.snapshot(), BTreeMap::from([(5, -1), (12, 5)]));
}

proptest! {
    #[test]
    fn written_value_reads_back(idx in 1usize..32, val in any::<i32>()) {
        let mut regs = RegisterFile::new();
        prop_assert!(regs.write(idx, val));
        prop_assert_eq!(regs.read(idx), val);
    }

    #[test]
    fn x0_reads_zero_after_any_write(val in any::<i32>()) {
        let mut regs = RegisterFile::new();
        let _ = regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
    }
}
