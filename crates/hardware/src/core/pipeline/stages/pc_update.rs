//! PC Update.
//!
//! Chooses the next PC once the instruction has retired: the computed target
//! when a branch is taken or on any jump, `pc + 4` otherwise.

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWb;

/// Returns whether the instruction redirects control flow.
pub const fn is_taken(mem_wb: &MemWb) -> bool {
    (mem_wb.ctrl.branch && mem_wb.zero) || mem_wb.ctrl.jump
}

/// Selects and installs the next PC.
///
/// # Returns
///
/// The new PC.
pub fn pc_update_stage(cpu: &mut Cpu, mem_wb: &MemWb) -> u32 {
    let sequential = mem_wb.pc.wrapping_add(WORD_BYTES);
    cpu.pc = match mem_wb.target {
        Some(target) if is_taken(mem_wb) => target,
        _ => sequential,
    };
    cpu.pc
}
