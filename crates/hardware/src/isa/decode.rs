//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit instruction encodings into the
//! structured `Decoded` form. It classifies the opcode, extracts the fields
//! each format carries, sign-extends the immediate as a native signed word,
//! and resolves the mnemonic from the function codes.
//!
//! SB and UJ immediates are reassembled with bit 0 forced to zero, so the
//! decoded value is already the byte offset. No later stage shifts it again.

use crate::common::error::DecodeError;
use crate::isa::instruction::{Decoded, Format, InstructionBits, Mnemonic, Opcode};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// SB-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;

/// Total number of bits in SB-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// UJ-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;

/// Total number of bits in UJ-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding (bit 31 is the MSB).
///
/// # Errors
///
/// Returns `DecodeError::UnknownOpcode` when the low seven bits select no
/// supported format, and `DecodeError::UnknownFunction` when the opcode is
/// known but the function fields match no mnemonic.
pub fn decode(inst: u32) -> Result<Decoded, DecodeError> {
    let opcode = Opcode::try_from(inst.opcode())?;
    let format = opcode.format();

    let (rd, rs1, rs2, funct3, funct7, imm) = match format {
        Format::R => (
            inst.rd(),
            inst.rs1(),
            inst.rs2(),
            inst.funct3(),
            inst.funct7(),
            0,
        ),
        Format::I => (inst.rd(), inst.rs1(), 0, inst.funct3(), 0, decode_i_type_imm(inst)),
        Format::S => (0, inst.rs1(), inst.rs2(), inst.funct3(), 0, decode_s_type_imm(inst)),
        Format::SB => (0, inst.rs1(), inst.rs2(), inst.funct3(), 0, decode_b_type_imm(inst)),
        Format::UJ => (inst.rd(), 0, 0, 0, 0, decode_j_type_imm(inst)),
    };

    let mnemonic = resolve_mnemonic(opcode, funct3, funct7).ok_or(DecodeError::UnknownFunction {
        opcode: opcode.bits(),
        funct3,
        funct7,
    })?;

    Ok(Decoded {
        raw: inst,
        opcode,
        format,
        rd,
        rs1,
        rs2,
        funct3,
        funct7,
        imm,
        mnemonic,
    })
}

/// Resolves the mnemonic for an opcode and its function fields.
///
/// R-type is keyed on `(funct3, funct7)`, I-type on `(funct3, opcode)`,
/// S and SB on `funct3` alone; UJ is always `jal`.
pub fn resolve_mnemonic(opcode: Opcode, f3: u32, f7: u32) -> Option<Mnemonic> {
    let mnemonic = match opcode {
        Opcode::Op => match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Mnemonic::Add,
            (funct3::ADD_SUB, funct7::SUB) => Mnemonic::Sub,
            (funct3::AND, funct7::DEFAULT) => Mnemonic::And,
            (funct3::OR, funct7::DEFAULT) => Mnemonic::Or,
            (funct3::SLT, funct7::DEFAULT) => Mnemonic::Slt,
            _ => return None,
        },
        Opcode::Load | Opcode::OpImm | Opcode::Jalr => match (f3, opcode.bits()) {
            (funct3::LW, opcodes::OP_LOAD) => Mnemonic::Lw,
            (funct3::ADD_SUB, opcodes::OP_IMM) => Mnemonic::Addi,
            (funct3::AND, opcodes::OP_IMM) => Mnemonic::Andi,
            (funct3::OR, opcodes::OP_IMM) => Mnemonic::Ori,
            (funct3::JALR, opcodes::OP_JALR) => Mnemonic::Jalr,
            _ => return None,
        },
        Opcode::Store => match f3 {
            funct3::SW => Mnemonic::Sw,
            _ => return None,
        },
        Opcode::Branch => match f3 {
            funct3::BEQ => Mnemonic::Beq,
            _ => return None,
        },
        Opcode::Jal => Mnemonic::Jal,
    };
    Some(mnemonic)
}

/// Decodes the immediate value for I-Type instructions.
///
/// The arithmetic shift of the whole word sign-extends `imm[11]` for free.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for SB-Type instructions.
///
/// The result is an even byte offset: bit 0 is never encoded.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for UJ-Type instructions.
///
/// The result is an even byte offset: bit 0 is never encoded.
fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
