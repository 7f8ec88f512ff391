//! Error types for the social-graph library.

use thiserror::Error;

use super::UserId;

/// All errors that can occur in the social-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// User has no entry in the adjacency mapping.
    #[error("User {0} does not exist in the network")]
    UserNotFound(UserId),

    /// Malformed line in an edge list or command script.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the recoverable "user absent" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::UserNotFound(_))
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(e: toml::ser::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

/// Convenience result type for social-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
