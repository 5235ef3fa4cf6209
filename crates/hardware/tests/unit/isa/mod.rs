pub mod disasm;
