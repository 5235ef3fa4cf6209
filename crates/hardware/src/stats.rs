//! Simulation statistics collection and reporting.
//!
//! This module tracks what the datapath retired. It provides:
//! 1. **Cycles:** One cycle per retired instruction, plus host throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** How many conditional branches were taken.

use std::time::Instant;

use crate::core::pipeline::signals::ControlSignals;

/// Simulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed; equal to the number of retired instructions.
    pub cycles: u64,

    /// Count of register-register and register-immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions (`jal`, `jalr`) retired.
    pub inst_jump: u64,

    /// Number of conditional branches whose condition held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Accounts for one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - Control vector of the instruction.
    /// * `taken` - Whether the PC update took the computed target.
    pub const fn record(&mut self, ctrl: &ControlSignals, taken: bool) {
        self.cycles += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
            if taken {
                self.branches_taken += 1;
            }
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("RV32 SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.cycles);
        println!("sim_freq                 {khz:.2} kHz");
        println!("sim_cpi                  1.0000");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            pct(self.inst_alu)
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            pct(self.inst_load)
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            pct(self.inst_store)
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        );
        println!(
            "  op.jump                {} ({:.2}%)",
            self.inst_jump,
            pct(self.inst_jump)
        );
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        let branches = self.inst_branch.max(1) as f64;
        println!(
            "  branch.taken           {} ({:.2}%)",
            self.branches_taken,
            (self.branches_taken as f64 / branches) * 100.0
        );
        println!("==========================================================");
    }
}
