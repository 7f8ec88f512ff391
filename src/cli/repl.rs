//! Interactive REPL for sgraph.
//!
//! Launch with `sgraph` (no subcommand) to enter interactive mode.
//! Type `/help` for available commands, Tab for completion.

use log::debug;
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::repl_commands::{self, ReplState};
use crate::cli::repl_complete;
use crate::config::SocialGraphConfig;

/// Print the welcome banner.
fn print_banner() {
    eprintln!();
    eprintln!(
        "  \x1b[1msgraph v{}\x1b[0m \x1b[90m- in-memory social graph\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Type \x1b[36m/help\x1b[0m for commands, \x1b[36m/menu\x1b[0m for the numbered menu, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();
}

/// Run the interactive REPL until `/exit` or end of input.
pub fn run(
    config: &SocialGraphConfig,
    state: &mut ReplState,
) -> Result<(), Box<dyn std::error::Error>> {
    print_banner();

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<repl_complete::SgraphHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(repl_complete::SgraphHelper::new()));
    repl_complete::bind_keys(&mut rl);

    let hist_path = config.repl.history_path();
    if config.repl.history && hist_path.exists() {
        if let Err(e) = rl.load_history(&hist_path) {
            debug!("could not load history from {}: {e}", hist_path.display());
        }
    }

    let mut stdout = std::io::stdout();
    loop {
        match rl.readline(&config.repl.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match repl_commands::execute(line, state, &mut stdout) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("  Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  (Ctrl+C) Type /exit to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    if config.repl.history {
        if let Some(parent) = hist_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(&hist_path) {
            debug!("could not save history to {}: {e}", hist_path.display());
        }
    }

    Ok(())
}
