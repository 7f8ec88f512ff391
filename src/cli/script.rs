//! Non-interactive execution of REPL commands from a file or pipe.

use std::io::{BufRead, Write};

use log::warn;
use serde::Serialize;

use crate::cli::repl_commands::{execute, ReplState};
use crate::types::GraphResult;

/// Outcome of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Command lines executed.
    pub executed: usize,
    /// Command lines whose operation failed.
    pub failed: usize,
    /// True if the script ended with an exit command.
    pub exited: bool,
}

/// Run every command line in `reader` against `state`.
///
/// Blank lines and `#` comments are skipped. A failing command is reported
/// as `line N: Error: ...` and the run continues.
pub fn run_script<R: BufRead>(
    reader: R,
    state: &mut ReplState,
    out: &mut dyn Write,
) -> GraphResult<ScriptReport> {
    let mut report = ScriptReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        report.executed += 1;
        match execute(trimmed, state, out) {
            Ok(true) => {
                report.exited = true;
                break;
            }
            Ok(false) => {}
            Err(e) => {
                report.failed += 1;
                warn!("script line {}: {e}", idx + 1);
                writeln!(out, "line {}: Error: {e}", idx + 1)?;
            }
        }
    }

    Ok(report)
}
