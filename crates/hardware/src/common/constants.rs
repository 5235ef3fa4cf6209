//! System-wide constants.
//!
//! Geometry of the architectural state shared by the loader, the datapath
//! stages and the configuration defaults.

/// Width of one instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Width of one instruction in bits.
pub const INSTRUCTION_BITS: usize = 32;

/// Number of architectural integer registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Index of the hard-wired zero register.
pub const ZERO_REG: usize = 0;

/// Default data memory size in words (128 bytes).
pub const DEFAULT_MEMORY_WORDS: usize = 32;

/// Largest accepted data memory size in words (4 MiB).
pub const MAX_MEMORY_WORDS: usize = 1 << 20;

/// Address of the first instruction.
pub const RESET_PC: u32 = 0;
