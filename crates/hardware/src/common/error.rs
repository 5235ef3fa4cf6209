//! Fatal error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode Errors:** Encodings whose opcode or function fields match no supported instruction.
//! 2. **Simulation Errors:** Alignment, range, load-time and setup failures, each carrying
//!    enough context (PC, raw instruction, stage) to reproduce the fault.
//! 3. **Stage Tags:** Identification of the datapath stage that raised a fault.
//!
//! None of these are retried: the simulation is deterministic, so every error halts the run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Datapath stage in which a fault was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and register read.
    Decode,
    /// ALU evaluation and target computation.
    Execute,
    /// Data memory access.
    Memory,
    /// Register file commit.
    Writeback,
    /// Next-PC selection.
    PcUpdate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
            Self::PcUpdate => "PC",
        };
        f.write_str(name)
    }
}

/// An instruction word that does not correspond to a supported instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low seven bits select no supported format.
    #[error("unknown opcode {opcode:#09b}")]
    UnknownOpcode {
        /// The unrecognized opcode field.
        opcode: u32,
    },

    /// The opcode is supported but the function fields select no mnemonic.
    #[error("no mnemonic for opcode {opcode:#09b} funct3={funct3:#05b} funct7={funct7:#09b}")]
    UnknownFunction {
        /// The opcode field.
        opcode: u32,
        /// The funct3 field.
        funct3: u32,
        /// The funct7 field (zero for formats that have none).
        funct7: u32,
    },
}

/// Fatal simulation error.
///
/// Runtime variants carry the PC and raw encoding of the faulting instruction;
/// load-time variants carry the source line that was rejected.
#[derive(Debug, Error)]
pub enum SimError {
    /// The fetched word could not be decoded. The instruction is not retired.
    #[error("[{stage}] pc={pc:#x} inst={raw:#010x}: {source}", stage = Stage::Decode)]
    Decode {
        /// Address of the faulting instruction.
        pc: u32,
        /// Raw instruction encoding.
        raw: u32,
        /// Reason the word was rejected.
        #[source]
        source: DecodeError,
    },

    /// A fetch or data access used an address that is not a multiple of 4.
    #[error("[{stage}] pc={pc:#x} inst={raw:#010x}: unaligned access to {addr:#x}")]
    UnalignedAccess {
        /// Address of the faulting instruction.
        pc: u32,
        /// Raw instruction encoding (zero when the fault precedes fetch).
        raw: u32,
        /// Stage that performed the access.
        stage: Stage,
        /// The offending byte address.
        addr: i64,
    },

    /// A data access fell outside data memory.
    #[error("[{stage}] pc={pc:#x} inst={raw:#010x}: address {addr:#x} out of range")]
    OutOfRangeAccess {
        /// Address of the faulting instruction.
        pc: u32,
        /// Raw instruction encoding.
        raw: u32,
        /// Stage that performed the access.
        stage: Stage,
        /// The offending byte address.
        addr: i64,
    },

    /// A program line did not parse into a 32-bit instruction word.
    #[error("line {line}: malformed instruction `{text}`: {reason}")]
    MalformedImmediate {
        /// 1-based source line number.
        line: usize,
        /// The offending text, trimmed.
        text: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The supplied initial register or memory map is unusable.
    #[error("invalid initial state: {reason}")]
    InvalidInitialState {
        /// What was wrong with it.
        reason: String,
    },

    /// A program or configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },
}

impl SimError {
    /// Returns the address of the faulting instruction for runtime faults.
    pub const fn pc(&self) -> Option<u32> {
        match self {
            Self::Decode { pc, .. }
            | Self::UnalignedAccess { pc, .. }
            | Self::OutOfRangeAccess { pc, .. } => Some(*pc),
            _ => None,
        }
    }

    /// Returns the stage that raised a runtime fault.
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Decode { .. } => Some(Stage::Decode),
            Self::UnalignedAccess { stage, .. } | Self::OutOfRangeAccess { stage, .. } => {
                Some(*stage)
            }
            _ => None,
        }
    }
}
