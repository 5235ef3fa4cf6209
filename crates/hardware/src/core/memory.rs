//! Data Memory and Program Image.
//!
//! This module models the two memories of the Harvard-style datapath:
//! 1. **Data Memory:** A word-addressed array of signed 32-bit words, indexed by byte address / 4.
//! 2. **Program:** The immutable instruction image, indexed by PC / 4.
//!
//! Both reject byte addresses that are not word aligned.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::WORD_BYTES;

/// Reason a data memory access was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryFault {
    /// The byte address is not a multiple of 4.
    Unaligned,
    /// The word index lies outside memory (including negative addresses).
    OutOfRange,
}

/// Observable effect of the memory stage, recorded in trace output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemoryEffect {
    /// A word was read.
    Load {
        /// Byte address.
        addr: u32,
        /// Value read.
        value: i32,
    },
    /// A word was written.
    Store {
        /// Byte address.
        addr: u32,
        /// Value written.
        value: i32,
    },
}

/// Word-addressed data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zero-filled memory holding `words` words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Returns the capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if memory has no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the capacity in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.words.len() as u64 * u64::from(WORD_BYTES)
    }

    /// Converts a byte address into a word index.
    fn index(&self, addr: i64) -> Result<usize, MemoryFault> {
        if addr % i64::from(WORD_BYTES) != 0 {
            return Err(MemoryFault::Unaligned);
        }
        if addr < 0 {
            return Err(MemoryFault::OutOfRange);
        }
        let idx = (addr / i64::from(WORD_BYTES)) as usize;
        if idx >= self.words.len() {
            return Err(MemoryFault::OutOfRange);
        }
        Ok(idx)
    }

    /// Reads the word at a byte address.
    ///
    /// # Errors
    ///
    /// Fails if the address is unaligned or outside memory.
    pub fn load(&self, addr: i64) -> Result<i32, MemoryFault> {
        self.index(addr).map(|i| self.words[i])
    }

    /// Writes the word at a byte address.
    ///
    /// # Errors
    ///
    /// Fails if the address is unaligned or outside memory; memory is unchanged.
    pub fn store(&mut self, addr: i64, value: i32) -> Result<(), MemoryFault> {
        let i = self.index(addr)?;
        self.words[i] = value;
        Ok(())
    }

    /// Returns every non-zero word keyed by its byte address.
    pub fn snapshot(&self) -> BTreeMap<u32, i32> {
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| (i as u32 * WORD_BYTES, v))
            .collect()
    }
}

/// Immutable instruction image, loaded once before the first cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<u32>,
}

impl Program {
    /// Wraps a sequence of instruction words.
    pub const fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the instruction at a word index, if any.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied()
    }

    /// Returns the instruction words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

impl From<Vec<u32>> for Program {
    fn from(words: Vec<u32>) -> Self {
        Self::new(words)
    }
}
