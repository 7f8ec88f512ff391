//! CLI command implementations.
//!
//! Each command runs one graph operation and renders its result to the
//! given writer, as text or JSON. Failures of the operation itself are
//! returned to the caller, which decides how to surface them.

use std::io::Write;
use std::path::Path;

use crate::config::OutputFormat;
use crate::format::EdgeListReader;
use crate::graph::SocialGraph;
use crate::types::{GraphResult, UserId};

fn join_ids(ids: &[UserId], sep: &str) -> String {
    ids.iter()
        .map(UserId::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn print_json(out: &mut dyn Write, value: &serde_json::Value) -> GraphResult<()> {
    writeln!(out, "{}", serde_json::to_string(value).unwrap_or_default())?;
    Ok(())
}

/// Connect two users.
pub fn cmd_connect(
    graph: &mut SocialGraph,
    a: UserId,
    b: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let added = graph.add_connection(a, b);
    match format {
        OutputFormat::Json => print_json(out, &serde_json::json!({"a": a, "b": b, "added": added})),
        OutputFormat::Text => {
            if added {
                writeln!(out, "Connected {a} -- {b}")?;
            } else {
                writeln!(out, "{a} and {b} are already connected")?;
            }
            Ok(())
        }
    }
}

/// Remove one connection between two users.
pub fn cmd_disconnect(
    graph: &mut SocialGraph,
    a: UserId,
    b: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    graph.delete_connection(a, b)?;
    match format {
        OutputFormat::Json => {
            print_json(out, &serde_json::json!({"a": a, "b": b, "deleted": true}))
        }
        OutputFormat::Text => {
            writeln!(out, "Disconnected {a} -- {b}")?;
            Ok(())
        }
    }
}

/// Breadth-first traversal.
pub fn cmd_bfs(
    graph: &SocialGraph,
    start: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let order = graph.bfs(start)?;
    render_traversal("BFS", start, &order, format, out)
}

/// Depth-first traversal.
pub fn cmd_dfs(
    graph: &SocialGraph,
    start: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let order = graph.dfs(start)?;
    render_traversal("DFS", start, &order, format, out)
}

fn render_traversal(
    kind: &str,
    start: UserId,
    order: &[UserId],
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({
                "traversal": kind.to_ascii_lowercase(),
                "start": start,
                "order": order,
            }),
        ),
        OutputFormat::Text => {
            writeln!(out, "{kind} from {start}: {}", join_ids(order, " "))?;
            Ok(())
        }
    }
}

/// Shortest path distance.
pub fn cmd_path(
    graph: &SocialGraph,
    src: UserId,
    dest: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let distance = graph.shortest_path(src, dest)?;
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({"src": src, "dest": dest, "distance": distance}),
        ),
        OutputFormat::Text => {
            match distance {
                Some(steps) => writeln!(out, "Shortest path is {steps} steps.")?,
                None => writeln!(out, "No path found.")?,
            }
            Ok(())
        }
    }
}

/// Shortest route, listing every user on the way.
pub fn cmd_route(
    graph: &SocialGraph,
    src: UserId,
    dest: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let route = graph.shortest_route(src, dest)?;
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({"src": src, "dest": dest, "route": route}),
        ),
        OutputFormat::Text => {
            match route {
                Some(route) => writeln!(out, "Route: {}", join_ids(&route, " -> "))?,
                None => writeln!(out, "No path found.")?,
            }
            Ok(())
        }
    }
}

/// Check whether a user exists.
pub fn cmd_search(
    graph: &SocialGraph,
    user: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let found = graph.search_user(user);
    match format {
        OutputFormat::Json => print_json(out, &serde_json::json!({"user": user, "found": found})),
        OutputFormat::Text => {
            if found {
                writeln!(out, "User found in the network.")?;
            } else {
                writeln!(out, "User not found.")?;
            }
            Ok(())
        }
    }
}

/// List a user's direct connections.
pub fn cmd_friends(
    graph: &SocialGraph,
    user: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let friends = graph.direct_connections(user)?;
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({"user": user, "connections": friends}),
        ),
        OutputFormat::Text => {
            if friends.is_empty() {
                writeln!(out, "User {user} has no direct connections.")?;
            } else {
                writeln!(
                    out,
                    "Direct connections of user {user}: {}",
                    join_ids(friends, " ")
                )?;
            }
            Ok(())
        }
    }
}

/// Number of neighbor entries of a user.
pub fn cmd_degree(
    graph: &SocialGraph,
    user: UserId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let degree = graph.degree(user)?;
    match format {
        OutputFormat::Json => print_json(out, &serde_json::json!({"user": user, "degree": degree})),
        OutputFormat::Text => {
            writeln!(out, "User {user} has {degree} connection entries.")?;
            Ok(())
        }
    }
}

/// Count distinct connections.
pub fn cmd_count(
    graph: &SocialGraph,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let total = graph.count_total_connections();
    match format {
        OutputFormat::Json => print_json(out, &serde_json::json!({"connections": total})),
        OutputFormat::Text => {
            writeln!(out, "Total number of connections in the network: {total}")?;
            Ok(())
        }
    }
}

/// List every user.
pub fn cmd_users(
    graph: &SocialGraph,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let users = graph.users();
    match format {
        OutputFormat::Json => print_json(out, &serde_json::json!({"users": users})),
        OutputFormat::Text => {
            if users.is_empty() {
                writeln!(out, "The network is empty.")?;
            } else {
                writeln!(out, "Users ({}): {}", users.len(), join_ids(&users, " "))?;
            }
            Ok(())
        }
    }
}

/// Graph statistics.
pub fn cmd_stats(
    graph: &SocialGraph,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let stats = graph.stats();
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({
                "stats": stats,
                "duplicate_edges": graph.duplicate_edges().name(),
            }),
        ),
        OutputFormat::Text => {
            writeln!(out, "Users: {}", stats.users)?;
            writeln!(out, "Connections: {}", stats.connections)?;
            writeln!(out, "Adjacency entries: {}", stats.adjacency_entries)?;
            writeln!(out, "Isolated users: {}", stats.isolated_users)?;
            writeln!(out, "Max degree: {}", stats.max_degree)?;
            writeln!(out, "Duplicate edges: {}", graph.duplicate_edges().name())?;
            Ok(())
        }
    }
}

/// Load an edge list into the graph.
pub fn cmd_load(
    graph: &mut SocialGraph,
    path: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let report = EdgeListReader::read_from_file(path, graph)?;
    match format {
        OutputFormat::Json => print_json(
            out,
            &serde_json::json!({"file": path.display().to_string(), "report": report}),
        ),
        OutputFormat::Text => {
            writeln!(
                out,
                "Loaded {} connections from {} ({} ignored)",
                report.added,
                path.display(),
                report.ignored
            )?;
            Ok(())
        }
    }
}
