//! Core graph structure: adjacency mapping from user to neighbor list.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{Connection, GraphError, GraphResult, UserId};

use super::traversal;

/// What `add_connection` does when the pair is already connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEdges {
    /// Append a parallel entry. `delete_connection` removes one copy per call.
    #[default]
    Keep,
    /// Leave the neighbor lists untouched.
    Ignore,
}

impl DuplicateEdges {
    /// Parse from a config/CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "keep" => Some(DuplicateEdges::Keep),
            "ignore" => Some(DuplicateEdges::Ignore),
            _ => None,
        }
    }

    /// Lowercase name as used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            DuplicateEdges::Keep => "keep",
            DuplicateEdges::Ignore => "ignore",
        }
    }
}

/// Summary counters for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Users with an entry in the mapping.
    pub users: usize,
    /// Distinct connections between two different users.
    pub connections: usize,
    /// Total neighbor-list entries, parallel and self-loop entries included.
    pub adjacency_entries: usize,
    /// Users present with an empty neighbor list.
    pub isolated_users: usize,
    /// Largest neighbor-list length.
    pub max_degree: usize,
}

/// Undirected social graph of users and their connections.
///
/// A user exists iff it has an entry in the mapping; entries are created by
/// [`SocialGraph::add_connection`] and never removed. Every edge is stored
/// on both endpoints, so `v` is in `u`'s list iff `u` is in `v`'s.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// user -> neighbors in insertion order.
    adjacency: HashMap<UserId, Vec<UserId>>,
    duplicate_edges: DuplicateEdges,
}

impl SocialGraph {
    /// Create a new empty graph that keeps parallel connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given duplicate-edge policy.
    pub fn with_duplicate_edges(duplicate_edges: DuplicateEdges) -> Self {
        Self {
            adjacency: HashMap::new(),
            duplicate_edges,
        }
    }

    /// The duplicate-edge policy in effect.
    pub fn duplicate_edges(&self) -> DuplicateEdges {
        self.duplicate_edges
    }

    /// Connect `a` and `b`, creating either user if missing.
    ///
    /// Returns `false` only when the pair was already connected and the
    /// policy is [`DuplicateEdges::Ignore`]. A self-loop stores `a` twice in
    /// its own list, once per side.
    pub fn add_connection(&mut self, a: UserId, b: UserId) -> bool {
        if self.duplicate_edges == DuplicateEdges::Ignore
            && self.adjacency.get(&a).is_some_and(|n| n.contains(&b))
        {
            debug!("connection {a} -- {b} already present, ignored");
            return false;
        }

        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        debug!("connected {a} -- {b}");
        true
    }

    /// Remove one occurrence of the `a` -- `b` connection from both sides.
    ///
    /// Fails if either user is absent. Removing a connection that does not
    /// exist between two present users is a successful no-op.
    pub fn delete_connection(&mut self, a: UserId, b: UserId) -> GraphResult<()> {
        self.require(a)?;
        self.require(b)?;

        let removed = self.remove_one(a, b);
        self.remove_one(b, a);
        debug!("disconnect {a} -- {b} (present: {removed})");
        Ok(())
    }

    fn remove_one(&mut self, from: UserId, to: UserId) -> bool {
        let Some(list) = self.adjacency.get_mut(&from) else {
            return false;
        };
        match list.iter().position(|&v| v == to) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Neighbors of `user` in insertion order.
    pub fn direct_connections(&self, user: UserId) -> GraphResult<&[UserId]> {
        self.adjacency
            .get(&user)
            .map(Vec::as_slice)
            .ok_or(GraphError::UserNotFound(user))
    }

    /// Number of neighbor-list entries for `user`.
    pub fn degree(&self, user: UserId) -> GraphResult<usize> {
        self.direct_connections(user).map(<[UserId]>::len)
    }

    /// Neighbors of `user`, empty if the user is absent.
    pub(crate) fn neighbors(&self, user: UserId) -> &[UserId] {
        self.adjacency.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct unordered pairs `{a, b}` with `a < b`.
    ///
    /// Both directions and parallel entries of one pair count once;
    /// self-loops are not counted.
    pub fn count_total_connections(&self) -> usize {
        let mut unique: HashSet<(UserId, UserId)> = HashSet::new();
        for (&user, neighbors) in &self.adjacency {
            for &neighbor in neighbors {
                if user < neighbor {
                    unique.insert((user, neighbor));
                }
            }
        }
        unique.len()
    }

    /// Distinct connections between different users, ascending.
    pub fn connections(&self) -> Vec<Connection> {
        let unique: BTreeSet<Connection> = self
            .adjacency
            .iter()
            .flat_map(|(&user, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&n| user < n)
                    .map(move |&n| Connection::new(user, n))
            })
            .collect();
        unique.into_iter().collect()
    }

    /// Whether `user` has an entry.
    pub fn search_user(&self, user: UserId) -> bool {
        self.adjacency.contains_key(&user)
    }

    /// All users, ascending.
    pub fn users(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.adjacency.keys().copied().collect();
        users.sort_unstable();
        users
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    /// True if no user exists yet.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Summary counters.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            users: self.user_count(),
            connections: self.count_total_connections(),
            adjacency_entries: self.adjacency.values().map(Vec::len).sum(),
            isolated_users: self.adjacency.values().filter(|n| n.is_empty()).count(),
            max_degree: self.adjacency.values().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: UserId) -> GraphResult<Vec<UserId>> {
        traversal::bfs(self, start)
    }

    /// Depth-first visitation order from `start`.
    pub fn dfs(&self, start: UserId) -> GraphResult<Vec<UserId>> {
        traversal::dfs(self, start)
    }

    /// Minimum number of hops from `src` to `dest`, `None` if unreachable.
    pub fn shortest_path(&self, src: UserId, dest: UserId) -> GraphResult<Option<usize>> {
        traversal::shortest_path(self, src, dest)
    }

    /// One minimum-length route from `src` to `dest`, endpoints included.
    pub fn shortest_route(&self, src: UserId, dest: UserId) -> GraphResult<Option<Vec<UserId>>> {
        traversal::shortest_route(self, src, dest)
    }

    pub(crate) fn require(&self, user: UserId) -> GraphResult<()> {
        if self.search_user(user) {
            Ok(())
        } else {
            Err(GraphError::UserNotFound(user))
        }
    }
}
