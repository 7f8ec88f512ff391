//! Command-line front end: one-shot commands, scripts and the interactive REPL.

pub mod commands;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;
pub mod script;

pub use repl_commands::{execute, ReplState};
pub use script::{run_script, ScriptReport};
