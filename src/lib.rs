//! social-graph: in-memory social graph of users and their connections.
//!
//! Users are opaque integer IDs; a connection is an undirected edge kept on
//! both endpoints. The graph answers neighbor, existence and counting
//! queries, breadth-first and depth-first traversals, and unweighted
//! shortest paths. Everything lives in memory for the life of the value.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{OutputFormat, SocialGraphConfig};
pub use format::{EdgeListReader, LoadReport};
pub use graph::{DuplicateEdges, GraphBuilder, GraphStats, SocialGraph};
pub use types::{Connection, GraphError, GraphResult, UserId};
