//! Instruction Decode (ID) Stage.
//!
//! Decodes the fetched word, generates the control vector from its opcode and
//! reads both source registers. Operands are read unconditionally; formats
//! without rs1/rs2 carry index 0, which reads as zero.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::control::control_unit;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::isa::decode::decode;

/// Executes the instruction decode stage.
///
/// # Errors
///
/// Returns `SimError::Decode` carrying the PC and raw word if the opcode or
/// its function fields are not part of the supported subset.
pub fn decode_stage(cpu: &Cpu, if_id: IfId) -> Result<IdEx, SimError> {
    let decoded = decode(if_id.inst).map_err(|source| SimError::Decode {
        pc: if_id.pc,
        raw: if_id.inst,
        source,
    })?;

    let ctrl = control_unit(decoded.opcode);
    trace!(pc = format_args!("{:#x}", if_id.pc), ?ctrl, "ID");

    Ok(IdEx {
        pc: if_id.pc,
        decoded,
        ctrl,
        rv1: cpu.regs.read(decoded.rs1),
        rv2: cpu.regs.read(decoded.rs2),
    })
}
