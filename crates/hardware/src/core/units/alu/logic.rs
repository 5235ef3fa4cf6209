//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR and signed set-less-than. The comparison
//! result is always 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Slt => (a < b) as i32,
        _ => 0,
    }
}
