//! Execute Stage Unit Tests.
//!
//! Verifies operand selection, the zero flag and branch/jump target
//! computation.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use rvsc_core::core::pipeline::latches::{ExMem, IfId};
use rvsc_core::core::pipeline::stages::{decode_stage, execute_stage};

/// Decode `inst` at `pc` with the given register preload and execute it.
fn execute(pc: u32, inst: u32, regs: &[(usize, i32)]) -> ExMem {
    let mut tc = TestContext::new(&[inst]);
    for &(r, v) in regs {
        tc.set_reg(r, v);
    }
    let id_ex = decode_stage(tc.cpu(), IfId { pc, inst }).unwrap();
    execute_stage(&id_ex)
}

#[test]
fn register_operands_feed_the_alu() {
    let ex = execute(0, InstructionBuilder::new().sub(3, 1, 2).build(), &[(1, 10), (2, 4)]);
    assert_eq!(ex.alu, 6);
    assert!(!ex.zero);
    assert_eq!(ex.target, None);
}

#[test]
fn alu_src_selects_immediate() {
    let ex = execute(0, InstructionBuilder::new().addi(5, 1, -3).build(), &[(1, 3), (2, 100)]);
    assert_eq!(ex.alu, 0);
    assert!(ex.zero);
}

#[test]
fn store_data_is_rs2() {
    let ex = execute(0, InstructionBuilder::new().sw(11, 10, 4).build(), &[(10, 0x70), (11, 9)]);
    assert_eq!(ex.alu, 0x74);
    assert_eq!(ex.store_data, 9);
}

#[test]
fn beq_target_is_relative_to_its_own_pc() {
    let ex = execute(0x10, InstructionBuilder::new().beq(1, 2, -8).build(), &[(1, 7), (2, 7)]);
    assert!(ex.zero);
    assert_eq!(ex.target, Some(0x8));
}

#[test]
fn jal_target_is_pc_plus_offset() {
    let ex = execute(0x4, InstructionBuilder::new().jal(1, 12).build(), &[]);
    assert_eq!(ex.target, Some(0x10));
}

#[test]
fn jalr_target_clears_bit_zero() {
    let ex = execute(0x0, InstructionBuilder::new().jalr(1, 2, 1).build(), &[(2, 0x70)]);
    assert_eq!(ex.target, Some(0x70));
}
