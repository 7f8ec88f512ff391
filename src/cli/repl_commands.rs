//! Command dispatch for the sgraph REPL and script runner.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::commands;
use crate::cli::repl_complete::{suggest_command, COMMANDS, MENU};
use crate::config::{OutputFormat, SocialGraphConfig};
use crate::graph::SocialGraph;
use crate::types::{GraphResult, UserId};

/// Session state.
#[derive(Debug, Default)]
pub struct ReplState {
    /// The graph every command operates on.
    pub graph: SocialGraph,
    /// Current output format.
    pub format: OutputFormat,
}

impl ReplState {
    pub fn new(graph: SocialGraph, format: OutputFormat) -> Self {
        Self { graph, format }
    }

    /// Empty graph and output format taken from `config`.
    pub fn from_config(config: &SocialGraphConfig) -> Self {
        Self::new(config.new_graph(), config.output.format)
    }
}

/// Parse exactly `N` user IDs, or print `usage` and return `None`.
fn user_args<const N: usize>(
    args: &str,
    usage: &str,
    out: &mut dyn Write,
) -> GraphResult<Option<[UserId; N]>> {
    let parsed: Vec<UserId> = args
        .split_whitespace()
        .map_while(|t| t.parse().ok())
        .collect();
    let tokens = args.split_whitespace().count();
    match <[UserId; N]>::try_from(parsed) {
        Ok(ids) if tokens == N => Ok(Some(ids)),
        _ => {
            writeln!(out, "Usage: {usage}")?;
            Ok(None)
        }
    }
}

/// Execute one command line. Returns `true` if the session should end.
///
/// Operation failures (an unknown user, an unreadable file) are returned as
/// errors; the graph stays usable afterwards.
pub fn execute(input: &str, state: &mut ReplState, out: &mut dyn Write) -> GraphResult<bool> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        cmd_help(out)?;
        return Ok(false);
    }

    let (cmd, args) = match input.split_once(char::is_whitespace) {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (input, ""),
    };
    let format = state.format;

    match cmd {
        "exit" | "quit" | "9" => return Ok(true),
        "help" | "h" | "?" => cmd_help(out)?,
        "menu" => cmd_menu(out)?,
        "clear" | "cls" => write!(out, "\x1b[2J\x1b[H")?,
        "connect" | "add" | "1" => {
            if let Some([a, b]) = user_args(args, "connect <a> <b>", out)? {
                commands::cmd_connect(&mut state.graph, a, b, format, out)?;
            }
        }
        "disconnect" | "delete" | "2" => {
            if let Some([a, b]) = user_args(args, "disconnect <a> <b>", out)? {
                commands::cmd_disconnect(&mut state.graph, a, b, format, out)?;
            }
        }
        "bfs" | "3" => {
            if let Some([user]) = user_args(args, "bfs <user>", out)? {
                commands::cmd_bfs(&state.graph, user, format, out)?;
            }
        }
        "dfs" | "4" => {
            if let Some([user]) = user_args(args, "dfs <user>", out)? {
                commands::cmd_dfs(&state.graph, user, format, out)?;
            }
        }
        "path" | "5" => {
            if let Some([src, dest]) = user_args(args, "path <src> <dest>", out)? {
                commands::cmd_path(&state.graph, src, dest, format, out)?;
            }
        }
        "route" => {
            if let Some([src, dest]) = user_args(args, "route <src> <dest>", out)? {
                commands::cmd_route(&state.graph, src, dest, format, out)?;
            }
        }
        "search" | "6" => {
            if let Some([user]) = user_args(args, "search <user>", out)? {
                commands::cmd_search(&state.graph, user, format, out)?;
            }
        }
        "friends" | "connections" | "7" => {
            if let Some([user]) = user_args(args, "friends <user>", out)? {
                commands::cmd_friends(&state.graph, user, format, out)?;
            }
        }
        "degree" => {
            if let Some([user]) = user_args(args, "degree <user>", out)? {
                commands::cmd_degree(&state.graph, user, format, out)?;
            }
        }
        "count" | "8" => commands::cmd_count(&state.graph, format, out)?,
        "users" => commands::cmd_users(&state.graph, format, out)?,
        "stats" => commands::cmd_stats(&state.graph, format, out)?,
        "load" => {
            if args.is_empty() {
                writeln!(out, "Usage: load <file>")?;
            } else {
                let path = PathBuf::from(args);
                commands::cmd_load(&mut state.graph, &path, format, out)?;
            }
        }
        "format" => match OutputFormat::from_name(args) {
            Some(f) => {
                state.format = f;
                writeln!(out, "Output format: {}", f.name())?;
            }
            None => writeln!(out, "Usage: format <text|json>")?,
        },
        _ => {
            if let Some(suggestion) = suggest_command(cmd) {
                writeln!(out, "Unknown command '{cmd}'. Did you mean {suggestion}?")?;
            } else {
                writeln!(out, "Unknown command '{cmd}'. Type /help for commands.")?;
            }
        }
    }

    Ok(false)
}

fn cmd_help(out: &mut dyn Write) -> GraphResult<()> {
    writeln!(out)?;
    writeln!(out, "  Commands:")?;
    writeln!(out)?;
    for (cmd, desc) in COMMANDS {
        writeln!(out, "    {cmd:<12} {desc}")?;
    }
    writeln!(out)?;
    writeln!(out, "  Menu numbers 1-9 work too; see /menu.")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_menu(out: &mut dyn Write) -> GraphResult<()> {
    writeln!(out, "Social Network Menu:")?;
    for (num, label) in MENU {
        writeln!(out, "{num}. {label}")?;
    }
    Ok(())
}
