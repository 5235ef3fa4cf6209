//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps register indices to their ABI names and back, for disassembly and
//! for naming registers in initial-state maps.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Parses a register name into its index.
///
/// Accepts architectural names (`x0`-`x31`), ABI names (`a0`, `sp`, ...) and
/// the frame-pointer alias `fp`.
pub fn parse(name: &str) -> Option<usize> {
    let name = name.trim();
    if let Some(num) = name.strip_prefix('x') {
        return num.parse::<usize>().ok().filter(|&i| i < REG_NAMES.len());
    }
    if name == "fp" {
        return Some(8);
    }
    REG_NAMES.iter().position(|&n| n == name)
}
