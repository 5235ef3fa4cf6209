//! Disassembler Output Tests.

use crate::common::builder::instruction::InstructionBuilder;
use rstest::rstest;
use rvsc_core::isa::disasm::disassemble_word;

#[rstest]
#[case(InstructionBuilder::new().sub(5, 6, 7), "sub x5, x6, x7")]
#[case(InstructionBuilder::new().slt(8, 9, 10), "slt x8, x9, x10")]
#[case(InstructionBuilder::new().andi(5, 6, 255), "andi x5, x6, 255")]
#[case(InstructionBuilder::new().ori(1, 2, -16), "ori x1, x2, -16")]
#[case(InstructionBuilder::new().lw(12, 10, 4), "lw x12, 4(x10)")]
#[case(InstructionBuilder::new().sw(11, 10, -8), "sw x11, -8(x10)")]
#[case(InstructionBuilder::new().beq(1, 2, -12), "beq x1, x2, -12")]
#[case(InstructionBuilder::new().jal(1, 2048), "jal x1, 2048")]
#[case(InstructionBuilder::new().jalr(0, 1, 0), "jalr x0, 0(x1)")]
fn renders_assembly(#[case] inst: InstructionBuilder, #[case] expected: &str) {
    assert_eq!(disassemble_word(inst.build()), expected);
}
