//! Decode Stage Unit Tests.
//!
//! Verifies control vector generation, register reads and decode faults.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use rvsc_core::common::{DecodeError, SimError};
use rvsc_core::core::control::control_unit;
use rvsc_core::core::pipeline::latches::IfId;
use rvsc_core::core::pipeline::stages::decode_stage;
use rvsc_core::isa::instruction::{Mnemonic, Opcode};

#[test]
fn reads_both_source_registers() {
    let inst = InstructionBuilder::new().add(13, 12, 11).build();
    let mut tc = TestContext::new(&[inst]);
    tc.set_reg(12, 5);
    tc.set_reg(11, 4);

    let id_ex = decode_stage(tc.cpu(), IfId { pc: 0, inst }).unwrap();
    assert_eq!(id_ex.decoded.mnemonic, Mnemonic::Add);
    assert_eq!((id_ex.rv1, id_ex.rv2), (5, 4));
    assert_eq!(id_ex.ctrl, control_unit(Opcode::Op));
}

#[test]
fn lw_generates_load_control() {
    let inst = InstructionBuilder::new().lw(12, 10, 0).build();
    let mut tc = TestContext::new(&[inst]);
    tc.set_reg(10, 0x70);

    let id_ex = decode_stage(tc.cpu(), IfId { pc: 0, inst }).unwrap();
    assert!(id_ex.ctrl.mem_read && id_ex.ctrl.mem_to_reg && id_ex.ctrl.alu_src);
    assert_eq!(id_ex.rv1, 0x70);
}

#[test]
fn unsupported_word_reports_pc_and_raw() {
    let tc = TestContext::new(&[]);
    let err = decode_stage(tc.cpu(), IfId { pc: 0x8, inst: 0xFFFF_FFFF }).unwrap_err();
    match err {
        SimError::Decode { pc, raw, source } => {
            assert_eq!(pc, 0x8);
            assert_eq!(raw, 0xFFFF_FFFF);
            assert_eq!(source, DecodeError::UnknownOpcode { opcode: 0x7F });
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}
