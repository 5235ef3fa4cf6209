//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (data memory size, tracing).
//! 2. **Initial State:** Sparse register and memory preloads applied before the first cycle.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! Configuration is supplied as JSON (for example by the `rvsc` CLI), or use
//! `Config::default()` for a zeroed machine with 32 words of data memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::{MAX_MEMORY_WORDS, NUM_REGISTERS, WORD_BYTES};
use crate::common::error::SimError;
use crate::isa::abi;

/// Default configuration constants for the simulator.
mod defaults {
    /// Data memory size in 32-bit words.
    pub const MEMORY_WORDS: usize = crate::common::constants::DEFAULT_MEMORY_WORDS;
}

/// Root configuration structure.
///
/// Every field is optional in JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use rvsc_core::config::Config;
///
/// let json = r#"{
///     "memory_words": 64,
///     "trace_instructions": true,
///     "initial": {
///         "registers": { "x10": 112, "a1": 4 },
///         "memory": { "0x70": 5 }
///     }
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory_words, 64);
/// assert!(config.trace_instructions);
/// assert_eq!(config.initial.registers.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Data memory size in words, at most `MAX_MEMORY_WORDS`.
    #[serde(default = "Config::default_memory_words")]
    pub memory_words: usize,

    /// Emit a `debug!` line per retired instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Register and memory preload.
    #[serde(default)]
    pub initial: InitialState,
}

impl Config {
    fn default_memory_words() -> usize {
        defaults::MEMORY_WORDS
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the JSON is malformed or has wrongly typed
    /// fields, or `SimError::InvalidConfig` if a value is out of bounds.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be simulated.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if `memory_words` exceeds
    /// `MAX_MEMORY_WORDS`.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.memory_words > MAX_MEMORY_WORDS {
            return Err(SimError::InvalidConfig {
                reason: format!(
                    "memory_words {} exceeds the limit of {MAX_MEMORY_WORDS}",
                    self.memory_words
                ),
            });
        }
        Ok(())
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read, or the errors of
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// The fixed preload used by the classic lab program.
    ///
    /// `x1 = 0x20`, `x2 = 0x5`, `x10 = 0x70`, `x11 = 0x4`,
    /// `mem[0x70] = 0x5`, `mem[0x74] = 0x10`.
    pub fn reference_preload() -> Self {
        Self {
            initial: InitialState::default()
                .with_register(abi::REG_RA, 0x20)
                .with_register(abi::REG_SP, 0x5)
                .with_register(abi::REG_A0, 0x70)
                .with_register(abi::REG_A1, 0x4)
                .with_memory(0x70, 0x5)
                .with_memory(0x74, 0x10),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_words: defaults::MEMORY_WORDS,
            trace_instructions: false,
            initial: InitialState::default(),
        }
    }
}

/// Sparse initial register and memory contents.
///
/// Register keys accept `xN`, ABI names (`a0`, `sp`, ...), decimal or `0x` hex
/// indices. Memory keys are byte addresses in decimal or `0x` hex and must be
/// word aligned. Values are truncated to 32 bits, so `-1` and `4294967295`
/// denote the same word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InitialState {
    /// Register preload keyed by register name or index.
    #[serde(default)]
    pub registers: BTreeMap<String, i64>,
    /// Memory preload keyed by byte address.
    #[serde(default)]
    pub memory: BTreeMap<String, i64>,
}

impl InitialState {
    /// Adds a register preload entry.
    #[must_use]
    pub fn with_register(mut self, idx: usize, value: i64) -> Self {
        let _ = self.registers.insert(format!("x{idx}"), value);
        self
    }

    /// Adds a memory preload entry at a byte address.
    #[must_use]
    pub fn with_memory(mut self, addr: u32, value: i64) -> Self {
        let _ = self.memory.insert(format!("{addr:#x}"), value);
        self
    }

    /// Returns `true` if nothing is preloaded.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty() && self.memory.is_empty()
    }

    /// Resolves the register entries into `(index, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInitialState` for unknown register names and
    /// indices of 32 or more.
    pub fn register_writes(&self) -> Result<Vec<(usize, i32)>, SimError> {
        self.registers
            .iter()
            .map(|(key, &value)| Ok((parse_register(key)?, truncate(value))))
            .collect()
    }

    /// Resolves the memory entries into `(byte address, value)` pairs.
    ///
    /// Range is checked later against the actual memory size.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInitialState` for keys that are not numbers
    /// or not multiples of 4.
    pub fn memory_writes(&self) -> Result<Vec<(i64, i32)>, SimError> {
        self.memory
            .iter()
            .map(|(key, &value)| {
                let addr = parse_number(key).ok_or_else(|| SimError::InvalidInitialState {
                    reason: format!("memory address '{key}' is not a number"),
                })?;
                if addr % i64::from(WORD_BYTES) != 0 {
                    return Err(SimError::InvalidInitialState {
                        reason: format!("memory address {addr:#x} is not word aligned"),
                    });
                }
                Ok((addr, truncate(value)))
            })
            .collect()
    }
}

/// Keeps the low 32 bits of a preload value.
const fn truncate(value: i64) -> i32 {
    value as i32
}

fn parse_register(key: &str) -> Result<usize, SimError> {
    let idx = abi::parse(key)
        .map(|i| i as i64)
        .or_else(|| {
            key.trim()
                .strip_prefix('x')
                .and_then(|n| n.parse::<i64>().ok())
        })
        .or_else(|| parse_number(key))
        .ok_or_else(|| SimError::InvalidInitialState {
            reason: format!("unknown register '{key}'"),
        })?;

    usize::try_from(idx)
        .ok()
        .filter(|&i| i < NUM_REGISTERS)
        .ok_or_else(|| SimError::InvalidInitialState {
            reason: format!("register index {idx} out of range (x0-x31)"),
        })
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return i64::from_str_radix(hex, 16).ok();
    }
    text.parse::<i64>().ok()
}
