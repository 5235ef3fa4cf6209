//! Main Execution Cycle.
//!
//! This module runs one instruction through every stage of the datapath:
//! 1. **Stage Coordination:** IF → ID → EX → MEM → WB → PC update, in order.
//! 2. **Fault Isolation:** A fault in any stage aborts the cycle before writeback,
//!    so neither the cycle counter nor the PC advance.
//! 3. **Observability:** Builds the per-cycle trace record.

use tracing::debug;

use super::Cpu;
use crate::common::error::SimError;
use crate::core::pipeline::stages::pc_update::is_taken;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, pc_update_stage, wb_stage,
};
use crate::isa::disasm::disassemble;
use crate::sim::trace::TraceRecord;

impl Cpu {
    /// Executes one full cycle.
    ///
    /// # Returns
    ///
    /// `Ok(Some(record))` when an instruction retired, `Ok(None)` when the PC
    /// has run past the end of the program.
    ///
    /// # Errors
    ///
    /// Any fetch, decode or memory fault. Register file, memory, PC and cycle
    /// counter are left as they were at the start of the cycle.
    pub fn tick(&mut self) -> Result<Option<TraceRecord>, SimError> {
        let Some(if_id) = fetch_stage(self)? else {
            return Ok(None);
        };
        let id_ex = decode_stage(self, if_id)?;
        let ex_mem = execute_stage(&id_ex);
        let mem_wb = mem_stage(self, ex_mem)?;

        let reg_write = wb_stage(self, &mem_wb);
        let taken = is_taken(&mem_wb);
        self.stats.record(&mem_wb.ctrl, taken);
        let next_pc = pc_update_stage(self, &mem_wb);

        let record = TraceRecord {
            cycle: self.stats.cycles,
            pc: mem_wb.pc,
            raw: mem_wb.decoded.raw,
            mnemonic: mem_wb.decoded.mnemonic,
            assembly: disassemble(&mem_wb.decoded),
            control: mem_wb.ctrl,
            alu_result: mem_wb.alu,
            memory: mem_wb.memory,
            reg_write,
            next_pc,
        };

        if self.trace {
            debug!(
                cycle = record.cycle,
                pc = format_args!("{:#x}", record.pc),
                inst = format_args!("{:#010x}", record.raw),
                "{}",
                record.assembly
            );
        }
        Ok(Some(record))
    }
}
