//! Instruction Disassembler.
//!
//! Converts decoded instructions into assembly text for trace records,
//! logging and test diagnostics. Registers are printed with their
//! architectural names (`x0`-`x31`); branch and jump offsets are printed as
//! signed byte offsets relative to the instruction.
//!
//! # Usage
//!
//! ```
//! use rvsc_core::isa::disasm::disassemble_word;
//! assert_eq!(disassemble_word(0x0005_2603), "lw x12, 0(x10)");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, Format, Opcode};

/// Disassembles a decoded instruction.
pub fn disassemble(d: &Decoded) -> String {
    let m = d.mnemonic;
    match (d.format, d.opcode) {
        (Format::R, _) => format!("{m} x{}, x{}, x{}", d.rd, d.rs1, d.rs2),
        (Format::I, Opcode::Load | Opcode::Jalr) => {
            format!("{m} x{}, {}(x{})", d.rd, d.imm, d.rs1)
        }
        (Format::I, _) => format!("{m} x{}, x{}, {}", d.rd, d.rs1, d.imm),
        (Format::S, _) => format!("{m} x{}, {}(x{})", d.rs2, d.imm, d.rs1),
        (Format::SB, _) => format!("{m} x{}, x{}, {}", d.rs1, d.rs2, d.imm),
        (Format::UJ, _) => format!("{m} x{}, {}", d.rd, d.imm),
    }
}

/// Disassembles a raw 32-bit word, or returns `"unknown"` for encodings the
/// decoder rejects.
pub fn disassemble_word(inst: u32) -> String {
    decode(inst).map_or_else(|_| "unknown".to_string(), |d| disassemble(&d))
}
