//! Single-cycle datapath.
//!
//! One instruction completes every stage before the next one is fetched, so
//! there is no hazard detection and no forwarding. It includes the following components:
//! 1. **Latches:** Per-cycle values handed from one stage to the next.
//! 2. **Signals:** The control vector generated at decode.
//! 3. **Stages:** Fetch, Decode, Execute, Memory, Writeback and PC update.

/// Per-cycle stage boundary values (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Datapath stage implementations.
pub mod stages;
