//! Execute (EX) Stage.
//!
//! Selects the second ALU operand, runs the ALU and computes the branch or
//! jump target. All arithmetic wraps at 32 bits.

use tracing::trace;

use crate::core::control::alu_control;
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::units::alu::Alu;

/// Executes the execute stage.
///
/// # Behavior
///
/// - Second operand is the immediate when `alu_src` is set, `rv2` otherwise.
/// - `zero` is set iff the ALU result is 0.
/// - Branches target `pc + imm`.
/// - `jal` targets `pc + imm`; `jalr` targets `(rv1 + imm) & !1`.
/// - Every other instruction has no target.
pub fn execute_stage(id_ex: &IdEx) -> ExMem {
    let d = &id_ex.decoded;
    let ctrl = id_ex.ctrl;

    let op = alu_control(ctrl.alu_op, d.funct3, d.funct7);
    let a = id_ex.rv1;
    let b = if ctrl.alu_src { d.imm } else { id_ex.rv2 };
    let alu = Alu::execute(op, a, b);

    let target = if ctrl.branch {
        Some(id_ex.pc.wrapping_add_signed(d.imm))
    } else if ctrl.jump {
        if ctrl.jump_reg {
            Some((id_ex.rv1.wrapping_add(d.imm) as u32) & !1)
        } else {
            Some(id_ex.pc.wrapping_add_signed(d.imm))
        }
    } else {
        None
    };

    trace!(pc = format_args!("{:#x}", id_ex.pc), ?op, a, b, alu, ?target, "EX");

    ExMem {
        pc: id_ex.pc,
        decoded: *d,
        ctrl,
        alu,
        zero: alu == 0,
        target,
        store_data: id_ex.rv2,
    }
}
