//! Instruction Encoder.
//!
//! Rebuilds the 32-bit encoding of a `Decoded` instruction from its fields.
//! For every word the decoder accepts, `encode(&decode(w)?) == w`, which is
//! how the split-immediate layouts are checked against each other.

use crate::isa::instruction::{
    Decoded, Format, FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, RD_MASK, RD_SHIFT,
    RS1_MASK, RS1_SHIFT, RS2_MASK, RS2_SHIFT,
};

/// Encodes a decoded instruction back into its 32-bit form.
pub fn encode(d: &Decoded) -> u32 {
    let opcode = d.opcode.bits();
    let imm = d.imm as u32;
    match d.format {
        Format::R => r_type(opcode, d.rd, d.funct3, d.rs1, d.rs2, d.funct7),
        Format::I => i_type(opcode, d.rd, d.funct3, d.rs1, imm),
        Format::S => s_type(opcode, d.funct3, d.rs1, d.rs2, imm),
        Format::SB => b_type(opcode, d.funct3, d.rs1, d.rs2, imm),
        Format::UJ => j_type(opcode, d.rd, imm),
    }
}

#[inline]
const fn reg(idx: usize, mask: u32, shift: u32) -> u32 {
    ((idx as u32) & mask) << shift
}

#[inline]
const fn f3(funct3: u32) -> u32 {
    (funct3 & FUNCT3_MASK) << FUNCT3_SHIFT
}

/// Encodes an R-type instruction.
pub const fn r_type(opcode: u32, rd: usize, funct3: u32, rs1: usize, rs2: usize, funct7: u32) -> u32 {
    (funct7 & FUNCT7_MASK) << FUNCT7_SHIFT
        | reg(rs2, RS2_MASK, RS2_SHIFT)
        | reg(rs1, RS1_MASK, RS1_SHIFT)
        | f3(funct3)
        | reg(rd, RD_MASK, RD_SHIFT)
        | opcode
}

/// Encodes an I-type instruction; only the low 12 bits of `imm` are kept.
pub const fn i_type(opcode: u32, rd: usize, funct3: u32, rs1: usize, imm: u32) -> u32 {
    (imm & 0xFFF) << 20 | reg(rs1, RS1_MASK, RS1_SHIFT) | f3(funct3) | reg(rd, RD_MASK, RD_SHIFT) | opcode
}

/// Encodes an S-type instruction, splitting `imm` into `imm[11:5]` and `imm[4:0]`.
pub const fn s_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: u32) -> u32 {
    let hi = (imm >> 5) & 0x7F;
    let lo = imm & 0x1F;
    hi << 25
        | reg(rs2, RS2_MASK, RS2_SHIFT)
        | reg(rs1, RS1_MASK, RS1_SHIFT)
        | f3(funct3)
        | lo << 7
        | opcode
}

/// Encodes an SB-type instruction from a byte offset; bit 0 is dropped.
pub const fn b_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: u32) -> u32 {
    let bit12 = (imm >> 12) & 1;
    let bits10_5 = (imm >> 5) & 0x3F;
    let bits4_1 = (imm >> 1) & 0xF;
    let bit11 = (imm >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | reg(rs2, RS2_MASK, RS2_SHIFT)
        | reg(rs1, RS1_MASK, RS1_SHIFT)
        | f3(funct3)
        | bits4_1 << 8
        | bit11 << 7
        | opcode
}

/// Encodes a UJ-type instruction from a byte offset; bit 0 is dropped.
pub const fn j_type(opcode: u32, rd: usize, imm: u32) -> u32 {
    let bit20 = (imm >> 20) & 1;
    let bits10_1 = (imm >> 1) & 0x3FF;
    let bit11 = (imm >> 11) & 1;
    let bits19_12 = (imm >> 12) & 0xFF;
    bit20 << 31 | bits10_1 << 21 | bit11 << 20 | bits19_12 << 12 | reg(rd, RD_MASK, RD_SHIFT) | opcode
}
