//! Simulator: the cycle driver around the CPU.
//!
//! The driver repeats fetch → decode → execute → memory → writeback → PC
//! update until the PC runs past the end of the program, a fault occurs, or
//! a stop is requested. Stop requests are only honored between cycles, so an
//! observer never sees a half-retired instruction.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::memory::Program;
use crate::sim::trace::{NullSink, TraceRecord, TraceSink};
use crate::stats::SimStats;

/// Driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// More cycles may execute.
    Running,
    /// The PC ran past the last instruction.
    HaltedNormal,
    /// A fetch, decode or memory fault ended the run.
    HaltedError,
}

/// Result of a single `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction retired.
    Retired(TraceRecord),
    /// Nothing executed; the simulator is halted.
    Halted,
}

/// Result of `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The simulator halted; `cycles` is the final count.
    Completed {
        /// Cycles executed in total.
        cycles: u64,
    },
    /// A stop request was honored; the simulator is still `Running`.
    Stopped {
        /// Cycles executed so far.
        cycles: u64,
    },
}

/// Cloneable handle for requesting a stop from another thread.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests that `run` return before the next cycle.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop is pending.
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Consumes a pending request.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Top-level simulator: CPU architectural state plus driver state.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memories, PC, stats).
    pub cpu: Cpu,
    state: RunState,
    failure: Option<String>,
    stop: StopHandle,
}

impl Simulator {
    /// Creates a simulator for `program` and applies the configured initial state.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the memory size is out of bounds,
    /// or `SimError::InvalidInitialState` if the preload is invalid.
    pub fn new(program: Program, config: &Config) -> Result<Self, SimError> {
        let mut cpu = Cpu::new(program, config)?;
        cpu.apply_initial_state(&config.initial)?;
        info!(
            instructions = cpu.program.len(),
            memory_words = cpu.memory.len(),
            "simulator ready"
        );
        Ok(Self {
            cpu,
            state: RunState::Running,
            failure: None,
            stop: StopHandle::default(),
        })
    }

    /// Current driver state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Message of the fault that halted the run, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Returns a handle that can stop `run` between cycles.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Cycles executed so far.
    pub const fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Retirement statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Non-zero registers keyed by index.
    pub fn register_snapshot(&self) -> BTreeMap<usize, i32> {
        self.cpu.register_snapshot()
    }

    /// Non-zero data memory words keyed by byte address.
    pub fn memory_snapshot(&self) -> BTreeMap<u32, i32> {
        self.cpu.memory_snapshot()
    }

    /// Executes one cycle, discarding the trace.
    ///
    /// # Errors
    ///
    /// See [`Simulator::step_with`].
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        self.step_with(&mut NullSink)
    }

    /// Executes one cycle and hands its record to `sink`.
    ///
    /// A halted simulator returns `StepOutcome::Halted` without executing.
    ///
    /// # Errors
    ///
    /// Returns the fault that ended the run; the state becomes
    /// `RunState::HaltedError` and later calls return `Halted`.
    pub fn step_with(&mut self, sink: &mut dyn TraceSink) -> Result<StepOutcome, SimError> {
        if self.state != RunState::Running {
            return Ok(StepOutcome::Halted);
        }

        match self.cpu.tick() {
            Ok(Some(record)) => {
                sink.record(&record);
                Ok(StepOutcome::Retired(record))
            }
            Ok(None) => {
                self.state = RunState::HaltedNormal;
                info!(
                    cycles = self.cycles(),
                    pc = format_args!("{:#x}", self.cpu.pc),
                    "program completed"
                );
                Ok(StepOutcome::Halted)
            }
            Err(e) => {
                self.state = RunState::HaltedError;
                warn!(cycles = self.cycles(), error = %e, "simulation halted on fault");
                self.failure = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Runs until halt or a stop request, discarding the trace.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run_with`].
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        self.run_with(&mut NullSink)
    }

    /// Runs until halt or a stop request, handing every record to `sink`.
    ///
    /// The stop handle is checked before each cycle. A simulator that is
    /// already halted completes immediately with its current cycle count.
    ///
    /// # Errors
    ///
    /// Returns the first fault; the state becomes `RunState::HaltedError`.
    pub fn run_with(&mut self, sink: &mut dyn TraceSink) -> Result<RunOutcome, SimError> {
        loop {
            if self.state == RunState::Running && self.stop.take() {
                info!(cycles = self.cycles(), "stop requested");
                return Ok(RunOutcome::Stopped {
                    cycles: self.cycles(),
                });
            }
            if matches!(self.step_with(sink)?, StepOutcome::Halted) {
                return Ok(RunOutcome::Completed {
                    cycles: self.cycles(),
                });
            }
        }
    }
}
