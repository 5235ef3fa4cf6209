//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of the single-cycle machine:
//! 1. **State Management:** Register file, program counter and cycle statistics.
//! 2. **Memories:** The immutable program image and word-addressed data memory.
//! 3. **Initialization:** Applying a sparse register/memory preload before the first cycle.

/// Per-cycle orchestration of the datapath stages.
pub mod execution;

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::RegisterFile;
use crate::common::constants::RESET_PC;
use crate::common::error::SimError;
use crate::config::{Config, InitialState};
use crate::core::memory::{DataMemory, MemoryFault, Program};
use crate::stats::SimStats;

/// Architectural state of the processor.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Integer register file.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Data memory.
    pub memory: DataMemory,
    /// Instruction memory.
    pub program: Program,
    /// Emit a `debug!` line per retired instruction.
    pub trace: bool,
    /// Retirement statistics; `stats.cycles` is the cycle counter.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU at reset: PC 0, registers and memory zeroed.
    ///
    /// The configured initial state is not applied; see
    /// [`Cpu::apply_initial_state`].
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the configured memory is too large.
    pub fn new(program: Program, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            regs: RegisterFile::new(),
            pc: RESET_PC,
            memory: DataMemory::new(config.memory_words),
            program,
            trace: config.trace_instructions,
            stats: SimStats::default(),
        })
    }

    /// Number of cycles executed so far.
    pub const fn cycles(&self) -> u64 {
        self.stats.cycles
    }

    /// Applies a sparse register and memory preload.
    ///
    /// Writes to `x0` are ignored. Nothing is written unless every entry is valid.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInitialState` for an unknown register,
    /// a register index of 32 or more, or a memory address that is
    /// unaligned or outside data memory.
    pub fn apply_initial_state(&mut self, initial: &InitialState) -> Result<(), SimError> {
        let registers = initial.register_writes()?;
        let words = initial.memory_writes()?;

        let mut memory = self.memory.clone();
        let size = memory.size_bytes();
        for &(addr, value) in &words {
            memory.store(addr, value).map_err(|fault| {
                let reason = match fault {
                    MemoryFault::Unaligned => format!("memory address {addr:#x} is not word aligned"),
                    MemoryFault::OutOfRange => {
                        format!("memory address {addr:#x} is outside {size} bytes of data memory")
                    }
                };
                SimError::InvalidInitialState { reason }
            })?;
        }
        self.memory = memory;

        for (idx, value) in registers {
            let _ = self.regs.write(idx, value);
        }

        debug!(
            registers = initial.registers.len(),
            words = words.len(),
            "applied initial state"
        );
        Ok(())
    }

    /// Non-zero registers keyed by index.
    pub fn register_snapshot(&self) -> BTreeMap<usize, i32> {
        self.regs.snapshot()
    }

    /// Non-zero data memory words keyed by byte address.
    pub fn memory_snapshot(&self) -> BTreeMap<u32, i32> {
        self.memory.snapshot()
    }
}
