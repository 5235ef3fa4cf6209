//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the structured forms produced by
//! decoding: the major opcode, its instruction format, the resolved mnemonic
//! and the `Decoded` record carried through one cycle of the datapath.

use std::fmt;

use serde::Serialize;

use crate::common::error::DecodeError;
use crate::isa::rv32i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Used to distinguish between standard and alternate R-type encodings
    /// (ADD vs SUB).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Encoding format of an instruction, which fixes its field layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register: rd, funct3, rs1, rs2, funct7.
    R,
    /// Immediate: rd, funct3, rs1, 12-bit immediate.
    I,
    /// Store: funct3, rs1, rs2, split 12-bit immediate.
    S,
    /// Conditional branch: funct3, rs1, rs2, split 13-bit even immediate.
    SB,
    /// Unconditional jump: rd, split 21-bit even immediate.
    UJ,
}

/// Major opcode of a supported instruction.
///
/// Every variant maps to exactly one format, so the decode table is
/// exhaustive at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// `0110011`: register-register arithmetic.
    Op,
    /// `0000011`: loads.
    Load,
    /// `0010011`: immediate arithmetic.
    OpImm,
    /// `0100011`: stores.
    Store,
    /// `1100011`: conditional branches.
    Branch,
    /// `1101111`: jump and link.
    Jal,
    /// `1100111`: jump and link register.
    Jalr,
}

impl Opcode {
    /// Returns the 7-bit encoding of this opcode.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Op => opcodes::OP_REG,
            Self::Load => opcodes::OP_LOAD,
            Self::OpImm => opcodes::OP_IMM,
            Self::Store => opcodes::OP_STORE,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Jal => opcodes::OP_JAL,
            Self::Jalr => opcodes::OP_JALR,
        }
    }

    /// Returns the format that lays out this opcode's fields.
    pub const fn format(self) -> Format {
        match self {
            Self::Op => Format::R,
            Self::Load | Self::OpImm | Self::Jalr => Format::I,
            Self::Store => Format::S,
            Self::Branch => Format::SB,
            Self::Jal => Format::UJ,
        }
    }
}

impl TryFrom<u32> for Opcode {
    type Error = DecodeError;

    /// Classifies the low seven bits of an instruction word.
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits & OPCODE_MASK {
            opcodes::OP_REG => Ok(Self::Op),
            opcodes::OP_LOAD => Ok(Self::Load),
            opcodes::OP_IMM => Ok(Self::OpImm),
            opcodes::OP_STORE => Ok(Self::Store),
            opcodes::OP_BRANCH => Ok(Self::Branch),
            opcodes::OP_JAL => Ok(Self::Jal),
            opcodes::OP_JALR => Ok(Self::Jalr),
            opcode => Err(DecodeError::UnknownOpcode { opcode }),
        }
    }
}

/// Resolved instruction mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    /// Integer addition.
    Add,
    /// Integer subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Set less than (signed).
    Slt,
    /// Load word.
    Lw,
    /// Add immediate.
    Addi,
    /// AND immediate.
    Andi,
    /// OR immediate.
    Ori,
    /// Jump and link register.
    Jalr,
    /// Store word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Jump and link.
    Jal,
}

impl Mnemonic {
    /// Returns the assembly spelling of this mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Slt => "slt",
            Self::Lw => "lw",
            Self::Addi => "addi",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Jalr => "jalr",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Jal => "jal",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded instruction containing all fields meaningful for its format.
///
/// Fields the format does not carry are zero: S and SB have no `rd`, UJ has
/// no `rs1`/`rs2`/`funct3`, and only R carries `funct7`. The immediate is
/// already sign-extended and, for SB and UJ, already a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Major opcode.
    pub opcode: Opcode,
    /// Field layout.
    pub format: Format,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Resolved mnemonic.
    pub mnemonic: Mnemonic,
}
