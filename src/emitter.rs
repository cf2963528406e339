//! Writes the evaluator's rendered string to standard output.

use std::io::Write;

/// Strip a single trailing newline if present, then write with no newline
/// added, matching the "no trailing newline" output contract.
pub fn emit<W: Write>(rendered: &str, mut out: W) -> std::io::Result<()> {
    let trimmed = rendered.strip_suffix('\n').unwrap_or(rendered);
    write!(out, "{trimmed}")
}
