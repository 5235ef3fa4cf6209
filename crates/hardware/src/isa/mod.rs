//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables for the supported RV32I
//! subset, the decoder that turns raw words into structured instructions,
//! the matching encoder, and a disassembler for trace output.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for the R, I, S, SB and UJ formats.
pub mod decode;

/// Instruction disassembler for trace records and diagnostics.
pub mod disasm;

/// Re-encoding of decoded instructions into their 32-bit form.
pub mod encode;

/// Instruction structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set tables (opcodes, funct3, funct7).
pub mod rv32i;
