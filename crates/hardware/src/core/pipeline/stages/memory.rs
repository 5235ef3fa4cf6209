//! Memory Access (MEM) Stage.
//!
//! Loads and stores go to word-addressed data memory at the ALU result.
//! Alignment is checked before range, and a faulting access leaves memory
//! untouched.

use tracing::trace;

use crate::common::error::{SimError, Stage};
use crate::core::Cpu;
use crate::core::memory::{MemoryEffect, MemoryFault};
use crate::core::pipeline::latches::{ExMem, MemWb};

/// Executes the memory access stage.
///
/// # Returns
///
/// The MEM/WB latch; `mem_out` holds the loaded word for loads and the ALU
/// result for every other instruction.
///
/// # Errors
///
/// Returns `SimError::UnalignedAccess` or `SimError::OutOfRangeAccess`
/// (stage MEM) for a bad effective address.
pub fn mem_stage(cpu: &mut Cpu, ex_mem: ExMem) -> Result<MemWb, SimError> {
    let addr = i64::from(ex_mem.alu);
    let fault = |fault: MemoryFault| {
        let (pc, raw, stage) = (ex_mem.pc, ex_mem.decoded.raw, Stage::Memory);
        match fault {
            MemoryFault::Unaligned => SimError::UnalignedAccess {
                pc,
                raw,
                stage,
                addr,
            },
            MemoryFault::OutOfRange => SimError::OutOfRangeAccess {
                pc,
                raw,
                stage,
                addr,
            },
        }
    };

    let (mem_out, memory) = if ex_mem.ctrl.mem_read {
        let value = cpu.memory.load(addr).map_err(fault)?;
        (
            value,
            Some(MemoryEffect::Load {
                addr: ex_mem.alu as u32,
                value,
            }),
        )
    } else if ex_mem.ctrl.mem_write {
        cpu.memory.store(addr, ex_mem.store_data).map_err(fault)?;
        (
            ex_mem.alu,
            Some(MemoryEffect::Store {
                addr: ex_mem.alu as u32,
                value: ex_mem.store_data,
            }),
        )
    } else {
        (ex_mem.alu, None)
    };

    if let Some(effect) = &memory {
        trace!(pc = format_args!("{:#x}", ex_mem.pc), ?effect, "MEM");
    }

    Ok(MemWb {
        pc: ex_mem.pc,
        decoded: ex_mem.decoded,
        ctrl: ex_mem.ctrl,
        alu: ex_mem.alu,
        zero: ex_mem.zero,
        target: ex_mem.target,
        mem_out,
        memory,
    })
}
