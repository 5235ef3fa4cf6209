use rvsc_core::isa::encode::{b_type, i_type, j_type, r_type, s_type};
use rvsc_core::isa::rv32i::funct3::*;
use rvsc_core::isa::rv32i::funct7::*;
use rvsc_core::isa::rv32i::opcodes::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    R,
    I,
    S,
    B,
    J,
}

/// Fluent builder producing encoded 32-bit instruction words.
#[derive(Clone, Copy, Debug)]
pub struct InstructionBuilder {
    layout: Layout,
    opcode: u32,
    rd: usize,
    funct3: u32,
    rs1: usize,
    rs2: usize,
    funct7: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            layout: Layout::R,
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            funct7: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for the supported instructions ---

    fn reg(mut self, funct3: u32, funct7: u32, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.layout = Layout::R;
        self.opcode = OP_REG;
        self.funct3 = funct3;
        self.funct7 = funct7;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self
    }

    fn imm_op(mut self, opcode: u32, funct3: u32, rd: usize, rs1: usize, imm: i32) -> Self {
        self.layout = Layout::I;
        self.opcode = opcode;
        self.funct3 = funct3;
        self.rd = rd;
        self.rs1 = rs1;
        self.imm = imm;
        self
    }

    pub fn add(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.reg(ADD_SUB, DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.reg(ADD_SUB, SUB, rd, rs1, rs2)
    }

    pub fn and(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.reg(AND, DEFAULT, rd, rs1, rs2)
    }

    pub fn or(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.reg(OR, DEFAULT, rd, rs1, rs2)
    }

    pub fn slt(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.reg(SLT, DEFAULT, rd, rs1, rs2)
    }

    pub fn addi(self, rd: usize, rs1: usize, imm: i32) -> Self {
        self.imm_op(OP_IMM, ADD_SUB, rd, rs1, imm)
    }

    pub fn andi(self, rd: usize, rs1: usize, imm: i32) -> Self {
        self.imm_op(OP_IMM, AND, rd, rs1, imm)
    }

    pub fn ori(self, rd: usize, rs1: usize, imm: i32) -> Self {
        self.imm_op(OP_IMM, OR, rd, rs1, imm)
    }

    pub fn lw(self, rd: usize, rs1: usize, imm: i32) -> Self {
        self.imm_op(OP_LOAD, LW, rd, rs1, imm)
    }

    pub fn jalr(self, rd: usize, rs1: usize, imm: i32) -> Self {
        self.imm_op(OP_JALR, JALR, rd, rs1, imm)
    }

    pub fn sw(mut self, rs2: usize, rs1: usize, imm: i32) -> Self {
        self.layout = Layout::S;
        self.opcode = OP_STORE;
        self.funct3 = SW;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self
    }

    pub fn beq(mut self, rs1: usize, rs2: usize, offset: i32) -> Self {
        self.layout = Layout::B;
        self.opcode = OP_BRANCH;
        self.funct3 = BEQ;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = offset;
        self
    }

    pub fn jal(mut self, rd: usize, offset: i32) -> Self {
        self.layout = Layout::J;
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = offset;
        self
    }

    pub fn build(self) -> u32 {
        let imm = self.imm as u32;
        match self.layout {
            Layout::R => r_type(self.opcode, self.rd, self.funct3, self.rs1, self.rs2, self.funct7),
            Layout::I => i_type(self.opcode, self.rd, self.funct3, self.rs1, imm),
            Layout::S => s_type(self.opcode, self.funct3, self.rs1, self.rs2, imm),
            Layout::B => b_type(self.opcode, self.funct3, self.rs1, self.rs2, imm),
            Layout::J => j_type(self.opcode, self.rd, imm),
        }
    }
}
