//! Datapath control signals and operation types.
//!
//! This module defines the control vector produced by the control unit for
//! every instruction, the coarse ALU operation class it carries, and the
//! concrete ALU operation the ALU control resolver refines it into.
//!
//! The vector is recomputed from the opcode each cycle and handed to later
//! stages by value; nothing in it survives into the next cycle.

use serde::Serialize;

/// Concrete ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum AluOp {
    /// Integer addition (wrapping).
    #[default]
    Add,
    /// Integer subtraction (wrapping).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Set less than (signed): 1 if `a < b`, else 0.
    Slt,
}

/// Coarse ALU behavior family selected by the control unit (`ALUOp`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum AluOpClass {
    /// Address computation for loads, stores and `jalr` (`00`): always ADD.
    #[default]
    Address,
    /// Branch comparison (`01`): always SUB, feeding the zero flag.
    Branch,
    /// Register-register arithmetic (`10`): resolved from funct3 and funct7.
    Register,
    /// Register-immediate arithmetic (`11`): resolved from funct3 only, since
    /// the funct7 bit positions belong to the immediate.
    Immediate,
}

/// Control signals for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// Write the result into `rd`.
    pub reg_write: bool,
    /// Read data memory at the ALU result (load).
    pub mem_read: bool,
    /// Write `rs2` into data memory at the ALU result (store).
    pub mem_write: bool,
    /// Conditional branch; taken when the zero flag is set.
    pub branch: bool,
    /// Unconditional jump (`jal`/`jalr`).
    pub jump: bool,
    /// Jump target comes from `rs1 + imm` rather than `pc + imm`.
    pub jump_reg: bool,
    /// Write the return address (`pc + 4`) into `rd`.
    pub link_reg: bool,
    /// Second ALU operand is the immediate rather than `rs2`.
    pub alu_src: bool,
    /// Writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// ALU behavior family.
    pub alu_op: AluOpClass,
}
