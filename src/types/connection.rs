//! Undirected connection between two users.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A distinct undirected connection, stored with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Connection {
    /// The smaller user ID.
    pub low: UserId,
    /// The larger user ID.
    pub high: UserId,
}

impl Connection {
    /// Create a connection, normalizing endpoint order.
    pub fn new(a: UserId, b: UserId) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// True if both endpoints are the same user.
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    /// Whether `user` is one of the endpoints.
    pub fn involves(&self, user: UserId) -> bool {
        self.low == user || self.high == user
    }
}

impl From<(UserId, UserId)> for Connection {
    fn from((a, b): (UserId, UserId)) -> Self {
        Connection::new(a, b)
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.low, self.high)
    }
}
