//! Core processor implementation.
//!
//! This module contains the single-cycle datapath: architectural state, the
//! control unit, the ALU, data memory and the five stages plus PC update that
//! one instruction walks through per cycle.

/// Control unit and ALU control resolver.
pub mod control;

/// Architectural state owned by the cycle driver.
pub mod cpu;

/// Word-addressed data memory and the immutable program image.
pub mod memory;

/// Datapath implementation (signals, per-cycle latches, stages).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
