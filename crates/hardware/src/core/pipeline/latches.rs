//! Stage boundary values for one cycle.
//!
//! This module defines the values handed from one stage to the next while a
//! single instruction walks the datapath:
//! IF/ID → ID/EX → EX/MEM → MEM/WB.
//!
//! Every latch is built fresh each cycle and consumed by the following stage,
//! so nothing here is carried from one instruction to the next.

use serde::Serialize;

use crate::core::memory::MemoryEffect;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Decoded;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control vector generated from the opcode.
    pub ctrl: ControlSignals,
    /// Value read from rs1.
    pub rv1: i32,
    /// Value read from rs2.
    pub rv2: i32,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control vector.
    pub ctrl: ControlSignals,
    /// ALU result (also the effective address for loads and stores).
    pub alu: i32,
    /// Set when the ALU result is zero.
    pub zero: bool,
    /// Branch or jump target; `None` for every other instruction.
    pub target: Option<u32>,
    /// Value of rs2, written to memory by stores.
    pub store_data: i32,
}

/// MEM/WB latch (Memory to Writeback and PC update).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control vector.
    pub ctrl: ControlSignals,
    /// ALU result.
    pub alu: i32,
    /// Set when the ALU result is zero.
    pub zero: bool,
    /// Branch or jump target.
    pub target: Option<u32>,
    /// Loaded word for loads, the ALU result otherwise.
    pub mem_out: i32,
    /// Memory access performed this cycle, if any.
    pub memory: Option<MemoryEffect>,
}

/// Register update committed by writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegWrite {
    /// Destination register index.
    pub rd: usize,
    /// Value written.
    pub value: i32,
}
