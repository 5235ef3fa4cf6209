//! Control Unit and ALU Control.
//!
//! The control unit is a pure function from opcode to control vector; the
//! ALU control resolver refines the coarse `AluOpClass` into a concrete
//! `AluOp` using the instruction's function fields.

use crate::core::pipeline::signals::{AluOp, AluOpClass, ControlSignals};
use crate::isa::instruction::Opcode;
use crate::isa::rv32i::{funct3, funct7};

/// Operation chosen when the function fields match no table row.
///
/// The decoder already rejects unknown mnemonics, so the datapath never
/// relies on this; it keeps the resolver total for direct callers.
pub const ALU_FALLBACK: AluOp = AluOp::Add;

/// Generates the control vector for an opcode.
///
/// | Opcode | RegWrite | MemRead | MemWrite | Branch | Jump | JumpReg | LinkReg | ALUSrc | MemtoReg | ALUOp |
/// |--------|---|---|---|---|---|---|---|---|---|----------|
/// | R-type | 1 | 0 | 0 | 0 | 0 | 0 | 0 | 0 | 0 | Register |
/// | lw     | 1 | 1 | 0 | 0 | 0 | 0 | 0 | 1 | 1 | Address  |
/// | sw     | 0 | 0 | 1 | 0 | 0 | 0 | 0 | 1 | 0 | Address  |
/// | I-arith| 1 | 0 | 0 | 0 | 0 | 0 | 0 | 1 | 0 | Immediate|
/// | beq    | 0 | 0 | 0 | 1 | 0 | 0 | 0 | 0 | 0 | Branch   |
/// | jal    | 1 | 0 | 0 | 0 | 1 | 0 | 1 | 0 | 0 | Address  |
/// | jalr   | 1 | 0 | 0 | 0 | 1 | 1 | 1 | 1 | 0 | Address  |
pub const fn control_unit(opcode: Opcode) -> ControlSignals {
    let off = ControlSignals {
        reg_write: false,
        mem_read: false,
        mem_write: false,
        branch: false,
        jump: false,
        jump_reg: false,
        link_reg: false,
        alu_src: false,
        mem_to_reg: false,
        alu_op: AluOpClass::Address,
    };

    match opcode {
        Opcode::Op => ControlSignals {
            reg_write: true,
            alu_op: AluOpClass::Register,
            ..off
        },
        Opcode::Load => ControlSignals {
            reg_write: true,
            mem_read: true,
            alu_src: true,
            mem_to_reg: true,
            ..off
        },
        Opcode::Store => ControlSignals {
            mem_write: true,
            alu_src: true,
            ..off
        },
        Opcode::OpImm => ControlSignals {
            reg_write: true,
            alu_src: true,
            alu_op: AluOpClass::Immediate,
            ..off
        },
        Opcode::Branch => ControlSignals {
            branch: true,
            alu_op: AluOpClass::Branch,
            ..off
        },
        Opcode::Jal => ControlSignals {
            reg_write: true,
            jump: true,
            link_reg: true,
            ..off
        },
        Opcode::Jalr => ControlSignals {
            reg_write: true,
            jump: true,
            jump_reg: true,
            link_reg: true,
            alu_src: true,
            ..off
        },
    }
}

/// Resolves the concrete ALU operation.
///
/// # Arguments
///
/// * `class` - The ALU operation class from the control vector.
/// * `f3` - The instruction's funct3 field.
/// * `f7` - The instruction's funct7 field; consulted for `AluOpClass::Register` only.
pub const fn alu_control(class: AluOpClass, f3: u32, f7: u32) -> AluOp {
    match class {
        AluOpClass::Address => AluOp::Add,
        AluOpClass::Branch => AluOp::Sub,
        AluOpClass::Register => match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
            (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
            (funct3::AND, _) => AluOp::And,
            (funct3::OR, _) => AluOp::Or,
            (funct3::SLT, _) => AluOp::Slt,
            _ => ALU_FALLBACK,
        },
        AluOpClass::Immediate => match f3 {
            funct3::ADD_SUB => AluOp::Add,
            funct3::AND => AluOp::And,
            funct3::OR => AluOp::Or,
            funct3::SLT => AluOp::Slt,
            _ => ALU_FALLBACK,
        },
    }
}
