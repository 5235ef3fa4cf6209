//! Writeback Stage Unit Tests.
//!
//! Verifies the writeback value priority (link, memory, ALU) and that `x0`
//! is never written.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use rvsc_core::core::pipeline::latches::{IfId, RegWrite};
use rvsc_core::core::pipeline::stages::{decode_stage, execute_stage, mem_stage, wb_stage};

fn retire(tc: &mut TestContext, pc: u32, inst: u32) -> Option<RegWrite> {
    let id_ex = decode_stage(tc.cpu(), IfId { pc, inst }).unwrap();
    let mem_wb = mem_stage(tc.cpu_mut(), execute_stage(&id_ex)).unwrap();
    wb_stage(tc.cpu_mut(), &mem_wb)
}

#[test]
fn alu_result_written_to_rd() {
    let mut tc = TestContext::new(&[]);
    tc.set_reg(1, 6);
    tc.set_reg(2, 3);
    let w = retire(&mut tc, 0, InstructionBuilder::new().or(3, 1, 2).build());
    assert_eq!(w, Some(RegWrite { rd: 3, value: 7 }));
    assert_eq!(tc.get_reg(3), 7);
}

#[test]
fn load_writes_memory_value() {
    let mut tc = TestContext::new(&[]);
    tc.set_reg(10, 0x70);
    tc.set_mem(0x70, 5);
    let _ = retire(&mut tc, 0, InstructionBuilder::new().lw(12, 10, 0).build());
    assert_eq!(tc.get_reg(12), 5);
}

#[test]
fn link_value_takes_priority() {
    let mut tc = TestContext::new(&[]);
    tc.set_reg(2, 0x70);
    let w = retire(&mut tc, 0x4, InstructionBuilder::new().jalr(1, 2, 0).build());
    assert_eq!(w, Some(RegWrite { rd: 1, value: 0x8 }));
}

#[test]
fn x0_destination_is_discarded() {
    let mut tc = TestContext::new(&[]);
    let w = retire(&mut tc, 0, InstructionBuilder::new().addi(0, 0, 5).build());
    assert_eq!(w, None);
    assert_eq!(tc.get_reg(0), 0);
}

#[test]
fn store_and_branch_write_nothing() {
    let mut tc = TestContext::new(&[]);
    assert_eq!(retire(&mut tc, 0, InstructionBuilder::new().sw(1, 0, 0).build()), None);
    assert_eq!(retire(&mut tc, 0, InstructionBuilder::new().beq(0, 0, 8).build()), None);
    assert!(tc.registers().is_empty());
}
