use std::collections::BTreeMap;

use rvsc_core::Simulator;
use rvsc_core::common::SimError;
use rvsc_core::config::{Config, InitialState};
use rvsc_core::core::Cpu;
use rvsc_core::core::memory::Program;
use rvsc_core::sim::simulator::{RunOutcome, RunState, StepOutcome};
use rvsc_core::sim::trace::{TraceRecord, VecSink};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Simulator over `program` with default configuration.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(program, &Config::default())
    }

    /// Simulator over `program` with the given configuration.
    pub fn with_config(program: &[u32], config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::new(Program::new(program.to_vec()), config)
            .expect("test configuration must be valid");
        Self { sim }
    }

    /// Simulator over `program` preloaded with `initial`.
    pub fn with_initial(program: &[u32], initial: InitialState) -> Self {
        let config = Config {
            initial,
            ..Config::default()
        };
        Self::with_config(program, &config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i32) {
        let _ = self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Write a data memory word at a byte address.
    pub fn set_mem(&mut self, addr: i64, val: i32) {
        self.sim
            .cpu
            .memory
            .store(addr, val)
            .expect("test address must be valid");
    }

    /// Read a data memory word at a byte address.
    pub fn get_mem(&self, addr: i64) -> i32 {
        self.sim
            .cpu
            .memory
            .load(addr)
            .expect("test address must be valid")
    }

    pub fn pc(&self) -> u32 {
        self.sim.pc()
    }

    pub fn cycles(&self) -> u64 {
        self.sim.cycles()
    }

    pub fn state(&self) -> RunState {
        self.sim.state()
    }

    /// Execute one cycle, expecting an instruction to retire.
    pub fn step(&mut self) -> TraceRecord {
        match self.sim.step().expect("step must not fault") {
            StepOutcome::Retired(record) => record,
            StepOutcome::Halted => panic!("simulator halted unexpectedly"),
        }
    }

    /// Execute one cycle, returning the raw outcome.
    pub fn try_step(&mut self) -> Result<StepOutcome, SimError> {
        self.sim.step()
    }

    /// Run to completion, expecting a normal halt.
    pub fn run(&mut self) -> u64 {
        match self.sim.run().expect("run must not fault") {
            RunOutcome::Completed { cycles } => cycles,
            RunOutcome::Stopped { cycles } => panic!("unexpected stop after {cycles} cycles"),
        }
    }

    /// Run to completion, collecting every trace record.
    pub fn run_traced(&mut self) -> Vec<TraceRecord> {
        let mut sink = VecSink::default();
        let _ = self.sim.run_with(&mut sink).expect("run must not fault");
        sink.records
    }

    pub fn registers(&self) -> BTreeMap<usize, i32> {
        self.sim.register_snapshot()
    }

    pub fn memory(&self) -> BTreeMap<u32, i32> {
        self.sim.memory_snapshot()
    }
}
