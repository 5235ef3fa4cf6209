//! Simulation driver and program loading.
//!
//! Provides the program text loader, the cycle driver state machine and the
//! per-cycle trace records it emits.

/// Program text parsing and file loading.
pub mod loader;

/// Cycle driver, run state and cooperative stop handle.
pub mod simulator;

/// Per-cycle trace records and sinks.
pub mod trace;
