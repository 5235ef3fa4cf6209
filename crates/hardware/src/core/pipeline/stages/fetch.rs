//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction word at the current PC. A PC past the end of the
//! program is the normal halt condition, not an error.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::common::error::{SimError, Stage};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfId;

/// Executes the instruction fetch stage.
///
/// # Returns
///
/// `Ok(Some(_))` with the fetched word, or `Ok(None)` when `pc / 4` is at or
/// beyond the program length.
///
/// # Errors
///
/// Returns `SimError::UnalignedAccess` (stage IF) if the PC is not a multiple
/// of 4. Alignment is checked before the program bound.
pub fn fetch_stage(cpu: &Cpu) -> Result<Option<IfId>, SimError> {
    let pc = cpu.pc;
    if pc % WORD_BYTES != 0 {
        return Err(SimError::UnalignedAccess {
            pc,
            raw: 0,
            stage: Stage::Fetch,
            addr: i64::from(pc),
        });
    }

    let Some(inst) = cpu.program.get((pc / WORD_BYTES) as usize) else {
        return Ok(None);
    };

    trace!(pc = format_args!("{pc:#x}"), inst = format_args!("{inst:#010x}"), "IF");
    Ok(Some(IfId { pc, inst }))
}
