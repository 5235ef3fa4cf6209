//! Single-cycle RV32 datapath simulator CLI.
//!
//! This binary runs one program to completion and reports the final state. It performs:
//! 1. **Setup:** Loads the program text and an optional JSON configuration (or the reference preload).
//! 2. **Run:** Drives the simulator, optionally streaming per-cycle trace records as JSON lines.
//! 3. **Report:** Prints PC, cycle count, non-zero registers and memory, and statistics.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rvsc_core::Simulator;
use rvsc_core::common::SimError;
use rvsc_core::config::Config;
use rvsc_core::isa::abi;
use rvsc_core::sim::loader;
use rvsc_core::sim::simulator::{RunOutcome, RunState, StopHandle};
use rvsc_core::sim::trace::{JsonLinesSink, NullSink, TraceRecord, TraceSink};

#[derive(Parser, Debug)]
#[command(
    name = "rvsc",
    author,
    version,
    about = "Single-cycle RV32 datapath simulator",
    long_about = "Run a program through a single-cycle RV32 datapath and print the final state.\n\nThe program file holds one instruction per line, either 32 binary digits or 0x-prefixed hex. Lines starting with # or // are comments.\n\nExamples:\n  rvsc program.txt --reference-preload\n  rvsc program.txt --config init.json --trace-json trace.jsonl\n  RUST_LOG=debug rvsc program.txt"
)]
struct Cli {
    /// Program file to execute.
    program: PathBuf,

    /// JSON configuration (memory size, tracing, initial registers and memory).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Preload x1, x2, x10, x11 and mem[0x70..0x78] with the classic lab values.
    #[arg(long, conflicts_with = "config")]
    reference_preload: bool,

    /// Write one JSON trace record per retired instruction to FILE.
    #[arg(long, value_name = "FILE")]
    trace_json: Option<PathBuf>,

    /// Stop after N retired instructions.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Print the final state as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log every retired instruction (raises the default log level to debug).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cmd_run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the `fmt` subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads, runs and reports.
///
/// Returns `Ok(false)` if the run ended on a fault; the state is still
/// reported in that case. Setup failures are returned as errors.
fn cmd_run(cli: &Cli) -> Result<bool, SimError> {
    let mut config = if let Some(path) = &cli.config {
        Config::from_json_file(path)?
    } else if cli.reference_preload {
        Config::reference_preload()
    } else {
        Config::default()
    };
    config.trace_instructions |= cli.verbose;

    let program = loader::load_program(&cli.program)?;
    let mut sim = Simulator::new(program, &config)?;

    let result = match &cli.trace_json {
        Some(path) => {
            let file = File::create(path).map_err(|source| SimError::Io {
                path: path.clone(),
                source,
            })?;
            let mut sink = JsonLinesSink::new(BufWriter::new(file));
            let result = drive(&mut sim, &mut sink, cli.max_steps);
            finish_trace(path, sink);
            result
        }
        None => drive(&mut sim, &mut NullSink, cli.max_steps),
    };

    let ok = match result {
        Ok(RunOutcome::Completed { .. }) => true,
        Ok(RunOutcome::Stopped { cycles }) => {
            println!("[*] Stopped after {cycles} instructions");
            true
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            false
        }
    };

    if cli.json {
        print_json(&sim);
    } else {
        print_report(&sim);
        sim.stats().print();
    }
    Ok(ok)
}

/// Runs the simulator, requesting a stop once `max_steps` instructions retired.
fn drive(
    sim: &mut Simulator,
    sink: &mut dyn TraceSink,
    max_steps: Option<u64>,
) -> Result<RunOutcome, SimError> {
    let stop = sim.stop_handle();
    if max_steps == Some(0) {
        stop.request_stop();
    }
    let mut limit = StepLimit {
        inner: sink,
        stop,
        remaining: max_steps,
    };
    sim.run_with(&mut limit)
}

/// Forwards records and requests a stop when the step budget runs out.
struct StepLimit<'a> {
    inner: &'a mut dyn TraceSink,
    stop: StopHandle,
    remaining: Option<u64>,
}

impl TraceSink for StepLimit<'_> {
    fn record(&mut self, record: &TraceRecord) {
        self.inner.record(record);
        if let Some(n) = self.remaining.as_mut() {
            *n = n.saturating_sub(1);
            if *n == 0 {
                self.stop.request_stop();
            }
        }
    }
}

fn finish_trace(path: &Path, sink: JsonLinesSink<BufWriter<File>>) {
    let failures = sink.failures();
    if failures > 0 {
        warn!(path = %path.display(), failures, "some trace records were not written");
    }
    if let Err(e) = sink.into_inner() {
        warn!(path = %path.display(), error = %e, "failed to flush trace file");
    }
}

fn state_name(state: RunState) -> &'static str {
    match state {
        RunState::Running => "running",
        RunState::HaltedNormal => "halted",
        RunState::HaltedError => "error",
    }
}

fn print_report(sim: &Simulator) {
    println!("\n==========================================================");
    println!("FINAL STATE ({})", state_name(sim.state()));
    println!("==========================================================");
    println!("pc                       {:#x}", sim.pc());
    println!("cycles                   {}", sim.cycles());
    if let Some(reason) = sim.failure() {
        println!("fault                    {reason}");
    }

    println!("----------------------------------------------------------");
    println!("REGISTERS (non-zero)");
    for (idx, value) in sim.register_snapshot() {
        let name = format!("x{idx} ({})", abi::name(idx));
        println!("  {name:<22} {:#010x} ({value})", value as u32);
    }

    println!("----------------------------------------------------------");
    println!("MEMORY (non-zero)");
    for (addr, value) in sim.memory_snapshot() {
        println!("  [{addr:#06x}]               {:#010x} ({value})", value as u32);
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    state: &'static str,
    pc: u32,
    cycles: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<&'a str>,
    registers: BTreeMap<String, i32>,
    memory: BTreeMap<String, i32>,
}

fn print_json(sim: &Simulator) {
    let summary = Summary {
        state: state_name(sim.state()),
        pc: sim.pc(),
        cycles: sim.cycles(),
        fault: sim.failure(),
        registers: sim
            .register_snapshot()
            .into_iter()
            .map(|(idx, v)| (format!("x{idx}"), v))
            .collect(),
        memory: sim
            .memory_snapshot()
            .into_iter()
            .map(|(addr, v)| (format!("{addr:#x}"), v))
            .collect(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => println!("{text}"),
        Err(e) => warn!(error = %e, "failed to serialize summary"),
    }
}
