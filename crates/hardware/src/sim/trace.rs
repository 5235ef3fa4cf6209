//! Per-cycle trace records.
//!
//! Every retired instruction produces one `TraceRecord`. Records are handed
//! to a `TraceSink`; the driver never buffers them itself.

use std::io::Write;

use serde::Serialize;

use crate::core::memory::MemoryEffect;
pub use crate::core::pipeline::latches::RegWrite;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Mnemonic;

/// What one cycle did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Cycle counter after this instruction retired (1 for the first).
    pub cycle: u64,
    /// PC of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub raw: u32,
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// Disassembly, e.g. `lw x12, 0(x10)`.
    pub assembly: String,
    /// Control vector the instruction executed with.
    pub control: ControlSignals,
    /// ALU result.
    pub alu_result: i32,
    /// Data memory access, if any.
    pub memory: Option<MemoryEffect>,
    /// Register update, if any.
    pub reg_write: Option<RegWrite>,
    /// PC after the update.
    pub next_pc: u32,
}

/// Consumer of trace records.
pub trait TraceSink {
    /// Receives the record of one retired instruction.
    fn record(&mut self, record: &TraceRecord);
}

/// Sink that drops every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _record: &TraceRecord) {}
}

/// Sink that keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    /// Records in retirement order.
    pub records: Vec<TraceRecord>,
}

impl TraceSink for VecSink {
    fn record(&mut self, record: &TraceRecord) {
        self.records.push(record.clone());
    }
}

/// Sink that writes one JSON object per line.
///
/// Write failures are counted rather than propagated, so a broken trace file
/// never aborts the simulation.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    failures: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failures: 0,
        }
    }

    /// Number of records that could not be written.
    pub const fn failures(&self) -> u64 {
        self.failures
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the flush error, if any.
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn record(&mut self, record: &TraceRecord) {
        let written = serde_json::to_writer(&mut self.writer, record)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if let Err(e) = written {
            self.failures += 1;
            tracing::warn!(error = %e, cycle = record.cycle, "failed to write trace record");
        }
    }
}
