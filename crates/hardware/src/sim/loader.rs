//! Program Loader.
//!
//! This module turns program text into an instruction image. It performs:
//! 1. **Parsing:** One instruction per line, as 32 binary digits (bit 31 first)
//!    or `0x` followed by 1 to 8 hex digits.
//! 2. **Filtering:** Blank lines and lines starting with `#` or `//` are skipped.
//! 3. **Validation:** Any other text rejects the whole program before the first fetch.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::constants::INSTRUCTION_BITS;
use crate::common::error::SimError;
use crate::core::memory::Program;

/// Parses program text into an instruction image.
///
/// # Errors
///
/// Returns `SimError::MalformedImmediate` with the 1-based line number for
/// the first line that is neither a comment nor a valid instruction word.
///
/// # Examples
///
/// ```
/// use rvsc_core::sim::loader::parse_program;
///
/// let text = "# lw x12, 0(x10)\n00000000000001010010011000000011\n0x00b606b3\n";
/// let program = parse_program(text).unwrap();
/// assert_eq!(program.words(), &[0x0005_2603, 0x00B6_06B3]);
/// ```
pub fn parse_program(text: &str) -> Result<Program, SimError> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let word = parse_word(line).map_err(|reason| SimError::MalformedImmediate {
            line: idx + 1,
            text: line.to_string(),
            reason: reason.to_string(),
        })?;
        words.push(word);
    }
    Ok(Program::new(words))
}

/// Reads a program file and parses it.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read, or the first parse error.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    info!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}

fn parse_word(line: &str) -> Result<u32, &'static str> {
    if let Some(hex) = line
        .strip_prefix("0x")
        .or_else(|| line.strip_prefix("0X"))
    {
        if hex.is_empty() || hex.len() > 8 {
            return Err("expected 1 to 8 hex digits after 0x");
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err("invalid hex digit");
        }
        return u32::from_str_radix(hex, 16).map_err(|_| "invalid hex digit");
    }

    if line.len() != INSTRUCTION_BITS {
        return Err("expected exactly 32 binary digits");
    }
    if !line.bytes().all(|b| b == b'0' || b == b'1') {
        return Err("invalid binary digit");
    }
    u32::from_str_radix(line, 2).map_err(|_| "invalid binary digit")
}
