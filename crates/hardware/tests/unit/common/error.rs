//! Error Taxonomy Unit Tests.
//!
//! Verifies stage tags, context accessors and the rendered messages.

use rvsc_core::common::{DecodeError, SimError, Stage};
use std::error::Error;

#[test]
fn stage_display_uses_datapath_abbreviations() {
    let names: Vec<String> = [
        Stage::Fetch,
        Stage::Decode,
        Stage::Execute,
        Stage::Memory,
        Stage::Writeback,
        Stage::PcUpdate,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["IF", "ID", "EX", "MEM", "WB", "PC"]);
}

#[test]
fn decode_error_exposes_its_source() {
    let err = SimError::Decode {
        pc: 0x8,
        raw: 0xFFFF_FFFF,
        source: DecodeError::UnknownOpcode { opcode: 0x7F },
    };
    assert_eq!(err.pc(), Some(0x8));
    assert_eq!(err.stage(), Some(Stage::Decode));
    assert!(err.source().is_some());
    let msg = err.to_string();
    assert!(msg.contains("0x8"), "{msg}");
    assert!(msg.contains("0xffffffff"), "{msg}");
}

#[test]
fn access_errors_report_their_stage() {
    let err = SimError::OutOfRangeAccess {
        pc: 0x4,
        raw: 0x0005_2603,
        stage: Stage::Memory,
        addr: 0x400,
    };
    assert_eq!(err.stage(), Some(Stage::Memory));
    assert!(err.to_string().contains("MEM"));
}
