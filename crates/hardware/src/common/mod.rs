//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every stage of the datapath:
//! 1. **Constants:** Word size, register count and default memory geometry.
//! 2. **Error Handling:** The fatal error taxonomy and the stage that raised it.
//! 3. **Register Management:** The 32-entry integer register file with a hard-wired `x0`.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault context.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGISTERS, WORD_BYTES};
pub use error::{DecodeError, SimError, Stage};
pub use reg::RegisterFile;
