//! Execution units and functional components.
//!
//! The single-cycle datapath needs only the integer ALU; address, branch
//! and jump arithmetic all go through it or through the execute stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
