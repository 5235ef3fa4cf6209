//! Writeback (WB) Stage.
//!
//! Commits the instruction's result to the register file. The return address
//! of a jump takes priority over the memory/ALU result; `x0` is never written.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::{MemWb, RegWrite};

/// Executes the writeback stage.
///
/// # Returns
///
/// The register update performed, or `None` when the instruction writes no
/// register or targets `x0`.
pub fn wb_stage(cpu: &mut Cpu, mem_wb: &MemWb) -> Option<RegWrite> {
    let rd = mem_wb.decoded.rd;
    let value = if mem_wb.ctrl.link_reg {
        mem_wb.pc.wrapping_add(WORD_BYTES) as i32
    } else if mem_wb.ctrl.reg_write {
        if mem_wb.ctrl.mem_to_reg {
            mem_wb.mem_out
        } else {
            mem_wb.alu
        }
    } else {
        return None;
    };

    if !cpu.regs.write(rd, value) {
        return None;
    }
    trace!(rd, value, "WB");
    Some(RegWrite { rd, value })
}
