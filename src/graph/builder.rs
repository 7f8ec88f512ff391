//! Fluent API for building SocialGraph instances.

use crate::types::UserId;

use super::{DuplicateEdges, SocialGraph};

/// Fluent builder for constructing a SocialGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    duplicate_edges: DuplicateEdges,
    connections: Vec<(UserId, UserId)>,
}

impl GraphBuilder {
    /// Create a new builder that keeps parallel connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-edge policy of the built graph.
    pub fn with_duplicate_edges(mut self, duplicate_edges: DuplicateEdges) -> Self {
        self.duplicate_edges = duplicate_edges;
        self
    }

    /// Queue a connection between two users.
    pub fn connect(&mut self, a: UserId, b: UserId) -> &mut Self {
        self.connections.push((a, b));
        self
    }

    /// Queue several connections, in order.
    pub fn connect_all<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (UserId, UserId)>,
    {
        self.connections.extend(pairs);
        self
    }

    /// Number of queued connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Build the final SocialGraph, applying connections in queue order.
    pub fn build(self) -> SocialGraph {
        let mut graph = SocialGraph::with_duplicate_edges(self.duplicate_edges);
        for (a, b) in self.connections {
            graph.add_connection(a, b);
        }
        graph
    }
}
