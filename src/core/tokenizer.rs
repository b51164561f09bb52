//! Section tokenizer for hpasmcli report text.
//!
//! Reduces one command's raw capture to the candidate data lines: blank
//! lines, the command echo, and the subsystem's column-header/underline
//! lines are dropped. Zero remaining lines means zero records, which is a
//! valid (empty) section; an entirely empty capture is an acquisition
//! failure and is rejected before this layer is reached.

use crate::core::subsystem::Subsystem;

/// Iterate over the data lines of a raw subsystem report.
pub fn data_lines<'a>(raw: &'a str, subsystem: Subsystem) -> impl Iterator<Item = &'a str> {
    let echo = subsystem.command();
    let prefixes = subsystem.header_prefixes();

    raw.lines().map(str::trim_end).filter(move |line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == echo {
            return false;
        }
        !prefixes.iter().any(|p| line.starts_with(p))
    })
}
