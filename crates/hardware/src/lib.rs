//! Single-cycle RISC-V datapath simulator library.
//!
//! This crate models a classic single-cycle RV32 datapath over a reduced
//! instruction subset (`add`, `sub`, `and`, `or`, `slt`, `lw`, `sw`, `addi`,
//! `andi`, `ori`, `beq`, `jal`, `jalr`) with the following:
//! 1. **ISA:** Field extraction, decoding with sign-extended immediates, re-encoding and disassembly.
//! 2. **Control:** A control unit producing an explicit per-cycle signal vector and an ALU control resolver.
//! 3. **Core:** Fetch, Decode, Execute, Memory, Writeback and PC-update stages over the register file and data memory.
//! 4. **Simulation:** Program loader, cycle driver state machine, per-cycle trace records and statistics.

/// Common types and constants (register file, error taxonomy, widths).
pub mod common;
/// Simulator configuration (memory size, tracing, initial state).
pub mod config;
/// CPU core (architectural state, control, datapath stages, ALU, data memory).
pub mod core;
/// Instruction set (opcode tables, decode, encode, disassembly, ABI names).
pub mod isa;
/// Program loading, cycle driver and trace records.
pub mod sim;
/// Retired-instruction statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state owned by the cycle driver.
pub use crate::core::Cpu;
/// Top-level cycle driver; construct with `Simulator::new`.
pub use crate::sim::simulator::Simulator;
