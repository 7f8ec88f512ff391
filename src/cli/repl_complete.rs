//! Tab completion for the sgraph interactive REPL.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, Helper, KeyEvent, RepeatCount,
};

/// All available REPL commands with their usage line.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/connect", "<a> <b>      Add a connection between two users"),
    ("/disconnect", "<a> <b>   Delete one connection between two users"),
    ("/bfs", "<user>             Breadth-first traversal"),
    ("/dfs", "<user>             Depth-first traversal"),
    ("/path", "<src> <dest>     Shortest path length"),
    ("/route", "<src> <dest>    Shortest path, listing users"),
    ("/search", "<user>          Check whether a user exists"),
    ("/friends", "<user>         Direct connections of a user"),
    ("/degree", "<user>          Number of connection entries of a user"),
    ("/count", "                 Total number of distinct connections"),
    ("/users", "                 List all users"),
    ("/stats", "                 Graph statistics"),
    ("/load", "<file>           Load connections from an edge-list file"),
    ("/format", "<text|json>    Switch output format"),
    ("/menu", "                  Show the numbered menu"),
    ("/clear", "                 Clear the screen"),
    ("/help", "                  Show available commands"),
    ("/exit", "                  Quit the REPL"),
];

/// The numbered menu, shown by `menu` and selectable by number.
pub const MENU: &[(&str, &str)] = &[
    ("1", "Add Connection"),
    ("2", "Delete Connection"),
    ("3", "Display BFS Traversal"),
    ("4", "Display DFS Traversal"),
    ("5", "Find Shortest Path"),
    ("6", "Search for User"),
    ("7", "Get Direct Connections of a User"),
    ("8", "Get Total Count of Connections"),
    ("9", "Exit"),
];

/// Output formats for completion.
pub const FORMATS: &[&str] = &["text", "json"];

/// sgraph REPL helper providing tab completion.
pub struct SgraphHelper;

impl Default for SgraphHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl SgraphHelper {
    pub fn new() -> Self {
        Self
    }

    /// Edge-list files in the current directory.
    fn edge_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        if let Ok(entries) = std::fs::read_dir(".") {
            for entry in entries.flatten() {
                let path = entry.path();
                if path
                    .extension()
                    .is_some_and(|e| e == "txt" || e == "edges" || e == "csv")
                {
                    if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                        files.push(name.to_string());
                    }
                }
            }
        }
        files.sort();
        files
    }
}

impl Completer for SgraphHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<12} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        let (cmd, args) = input.split_once(' ').unwrap_or((input, ""));
        let prefix_start = input.len() - args.len();
        let candidates: Vec<String> = match cmd {
            "/load" => self.edge_files(),
            "/format" => FORMATS.iter().map(|f| f.to_string()).collect(),
            _ => return Ok((pos, Vec::new())),
        };
        let matches: Vec<Pair> = candidates
            .iter()
            .filter(|c| c.starts_with(args.trim()))
            .map(|c| Pair {
                display: c.clone(),
                replacement: format!("{c} "),
            })
            .collect();
        Ok((prefix_start, matches))
    }
}

impl Hinter for SgraphHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for SgraphHelper {}
impl Validator for SgraphHelper {}
impl Helper for SgraphHelper {}

/// Tab accepts hint if present, else triggers completion.
pub struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Bind custom key sequences.
pub fn bind_keys(rl: &mut rustyline::Editor<SgraphHelper, rustyline::history::DefaultHistory>) {
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );
}

/// Closest command to a mistyped one, within edit distance 3.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;

    for &(cmd, _) in COMMANDS {
        let dist = levenshtein(&input_lower, &cmd[1..]);
        if dist <= 3 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((cmd, dist));
        }
    }

    best.map(|(cmd, _)| cmd)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_len]
}
