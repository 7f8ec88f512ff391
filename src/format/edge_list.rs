//! Edge-list reader.
//!
//! One connection per line, two integer user IDs separated by whitespace
//! or a comma. Blank lines and `#` comments are skipped:
//!
//! ```text
//! # friends
//! 1 2
//! 2,3
//! -4 7   # negative IDs are fine
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::graph::SocialGraph;
use crate::types::{GraphError, GraphResult, UserId};

/// Outcome of loading an edge list into a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Connection lines read.
    pub lines: usize,
    /// Connections applied to the graph.
    pub added: usize,
    /// Connections skipped by the duplicate-edge policy.
    pub ignored: usize,
}

/// Parse one edge-list line. `Ok(None)` for blank and comment-only lines.
pub fn parse_edge_line(line: &str, line_no: usize) -> GraphResult<Option<(UserId, UserId)>> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 2 {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!("expected two user IDs, found {} fields", tokens.len()),
        });
    }

    let parse = |t: &str| {
        t.parse::<UserId>().map_err(|_| GraphError::Parse {
            line: line_no,
            message: format!("invalid user ID '{t}'"),
        })
    };
    Ok(Some((parse(tokens[0])?, parse(tokens[1])?)))
}

/// Reads edge lists into a [`SocialGraph`].
pub struct EdgeListReader;

impl EdgeListReader {
    /// Load connections from a file.
    pub fn read_from_file(path: &Path, graph: &mut SocialGraph) -> GraphResult<LoadReport> {
        let file = File::open(path)?;
        let report = Self::read_from(BufReader::new(file), graph)?;
        info!(
            "loaded {} connections from {} ({} ignored)",
            report.added,
            path.display(),
            report.ignored
        );
        Ok(report)
    }

    /// Load connections from any buffered reader.
    ///
    /// The whole input is parsed before the graph is touched, so a malformed
    /// line leaves the graph unchanged.
    pub fn read_from<R: BufRead>(reader: R, graph: &mut SocialGraph) -> GraphResult<LoadReport> {
        let mut pairs = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(pair) = parse_edge_line(&line, idx + 1)? {
                pairs.push(pair);
            }
        }

        let mut report = LoadReport {
            lines: pairs.len(),
            ..LoadReport::default()
        };
        for (a, b) in pairs {
            if graph.add_connection(a, b) {
                report.added += 1;
            } else {
                report.ignored += 1;
            }
        }
        Ok(report)
    }
}
