//! Interactive name prompt with re-prompting on blank input
//!
//! The pipeline only ever runs with a non-empty trimmed name; this loop
//! enforces that at the input boundary instead of making the core
//! reject empty strings.

use crate::io::configuration::NAME_PROMPT;
use crate::io::error::{IdenticonError, Result};
use std::io::{BufRead, Write};

/// Read a non-empty name, re-prompting until one is entered
///
/// Writes the prompt to `output`, reads a line from `input`, and trims
/// surrounding whitespace. Blank entries repeat the prompt.
///
/// # Errors
///
/// Returns [`IdenticonError::Prompt`] if writing the prompt or reading a
/// line fails, and [`IdenticonError::EmptyName`] if `input` reaches
/// end-of-input before a usable name is entered.
pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(output, "{NAME_PROMPT}").map_err(|e| IdenticonError::Prompt {
            operation: "write prompt",
            source: e,
        })?;
        output.flush().map_err(|e| IdenticonError::Prompt {
            operation: "flush prompt",
            source: e,
        })?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line).map_err(|e| IdenticonError::Prompt {
            operation: "read line",
            source: e,
        })?;

        if bytes_read == 0 {
            return Err(IdenticonError::EmptyName);
        }

        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}
