//! Datapath stage implementations.
//!
//! This module contains the individual stages one instruction walks through
//! in a single cycle. It includes:
//! 1. **Fetch:** Reads the instruction at the PC from the program image.
//! 2. **Decode:** Decodes fields, generates the control vector, reads operands.
//! 3. **Execute:** Performs the ALU operation and computes branch/jump targets.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits the result to the register file and retires the instruction.
//! 6. **PC Update:** Selects the next PC.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Next-PC selection.
pub mod pc_update;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// PC update entry point.
pub use pc_update::pc_update_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
