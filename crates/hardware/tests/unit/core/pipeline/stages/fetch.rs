//! Fetch Stage Unit Tests.
//!
//! Verifies word fetch at the PC, the end-of-program halt signal and the
//! alignment check that precedes the program bound.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use rvsc_core::common::{SimError, Stage};
use rvsc_core::core::pipeline::latches::IfId;
use rvsc_core::core::pipeline::stages::fetch_stage;

fn two_instructions() -> TestContext {
    TestContext::new(&[
        InstructionBuilder::new().addi(1, 0, 1).build(),
        InstructionBuilder::new().addi(2, 0, 2).build(),
    ])
}

#[test]
fn fetches_word_at_pc() {
    let mut tc = two_instructions();
    tc.cpu_mut().pc = 4;
    let if_id = fetch_stage(tc.cpu()).unwrap();
    assert_eq!(
        if_id,
        Some(IfId {
            pc: 4,
            inst: InstructionBuilder::new().addi(2, 0, 2).build(),
        })
    );
}

#[test]
fn pc_at_program_end_halts() {
    let mut tc = two_instructions();
    tc.cpu_mut().pc = 8;
    assert_eq!(fetch_stage(tc.cpu()).unwrap(), None);
}

#[test]
fn empty_program_halts_immediately() {
    let tc = TestContext::new(&[]);
    assert_eq!(fetch_stage(tc.cpu()).unwrap(), None);
}

#[test]
fn unaligned_pc_faults_before_bound_check() {
    let mut tc = two_instructions();
    for pc in [2, 0x1002] {
        tc.cpu_mut().pc = pc;
        match fetch_stage(tc.cpu()) {
            Err(SimError::UnalignedAccess { stage, addr, .. }) => {
                assert_eq!(stage, Stage::Fetch);
                assert_eq!(addr, i64::from(pc));
            }
            other => panic!("expected unaligned fetch, got {other:?}"),
        }
    }
}
