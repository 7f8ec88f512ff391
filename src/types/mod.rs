//! All data types for the social-graph library.

pub mod connection;
pub mod error;

pub use connection::Connection;
pub use error::{GraphError, GraphResult};

/// Identity of a user. Any integer, negative included, is a valid user.
pub type UserId = i64;
