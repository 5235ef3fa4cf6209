//! Integer Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 architectural
//! integer registers. It provides:
//! 1. **Storage:** 32 signed 32-bit registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` always reads 0 and ignores writes.
//! 3. **Observability:** A sparse snapshot of the non-zero registers.

use std::collections::BTreeMap;

use super::constants::{NUM_REGISTERS, ZERO_REG};

/// Architectural integer register file.
///
/// Register `x0` is hard-wired to zero; every other register holds a
/// two's-complement 32-bit value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits wide,
    /// so the datapath never produces such an index.
    #[inline]
    pub fn read(&self, idx: usize) -> i32 {
        if idx == ZERO_REG { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The value to write.
    ///
    /// # Returns
    ///
    /// `true` if the register was modified, `false` for writes to `x0`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i32) -> bool {
        if idx == ZERO_REG {
            return false;
        }
        self.regs[idx] = val;
        true
    }

    /// Returns every register that holds a non-zero value, keyed by index.
    pub fn snapshot(&self) -> BTreeMap<usize, i32> {
        self.regs
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| (i, v))
            .collect()
    }
}
